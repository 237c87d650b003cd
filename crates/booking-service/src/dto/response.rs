//! 页面视图数据 DTO 定义
//!
//! 模板渲染是外部协作方，handler 只产出视图数据载荷；
//! 每个载荷都由 `Page` 包装，携带待显示的 flash 消息。

use axum::http::StatusCode;
use serde::Serialize;

use crate::models::{Area, Artist, ArtistShowEntry, ShowListing, Venue, VenueShowEntry};

/// 页面载荷统一包装
///
/// flash 为上一次变更操作排队的一次性提示消息
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<String>,
    pub data: T,
}

impl<T: Serialize> Page<T> {
    pub fn new(flash: Option<String>, data: T) -> Self {
        Self { flash, data }
    }
}

/// 场馆列表页：全部场馆 + 区域分组
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenuesPage {
    pub areas: Vec<Area>,
    pub venues: Vec<Venue>,
}

/// 艺人列表页
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistsPage {
    pub artists: Vec<Artist>,
}

/// 搜索结果页：匹配集合 + 回显的搜索词
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T> {
    pub count: usize,
    pub results: Vec<T>,
    pub search_term: String,
}

impl<T> SearchResults<T> {
    pub fn new(results: Vec<T>, search_term: String) -> Self {
        Self {
            count: results.len(),
            results,
            search_term,
        }
    }
}

/// 场馆详情页：实体 + 按当前时间切分的演出
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueDetail {
    pub venue: Venue,
    pub upcoming_shows: Vec<VenueShowEntry>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<VenueShowEntry>,
    pub past_shows_count: usize,
}

/// 艺人详情页：实体 + 按当前时间切分的演出
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDetail {
    pub artist: Artist,
    pub upcoming_shows: Vec<ArtistShowEntry>,
    pub upcoming_shows_count: usize,
    pub past_shows: Vec<ArtistShowEntry>,
    pub past_shows_count: usize,
}

/// 演出列表页
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowsPage {
    pub shows: Vec<ShowListing>,
}

/// 场馆表单页：创建时为空表单，编辑时预填且附带实体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueFormPage {
    pub form: crate::dto::VenueForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<Venue>,
}

/// 艺人表单页：创建时为空表单，编辑时预填且附带实体
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistFormPage {
    pub form: crate::dto::ArtistForm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Artist>,
}

/// 演出表单页
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowFormPage {
    pub form: crate::dto::ShowForm,
}

/// 错误页载荷（404/500 专用页面）
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPage {
    pub status: u16,
    pub title: String,
    pub message: String,
}

impl ErrorPage {
    pub fn new(status: StatusCode, title: &str, message: &str) -> Self {
        Self {
            status: status.as_u16(),
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "Not Found",
            "The page you're looking for doesn't exist.",
        )
    }

    pub fn server_error() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "Something went wrong on our end. Please try again later.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_results_count() {
        let results = SearchResults::new(vec![1, 2, 3], "fill".into());
        assert_eq!(results.count, 3);
        assert_eq!(results.search_term, "fill");
    }

    #[test]
    fn test_page_serializes_flash() {
        let page = Page::new(Some("done".into()), ShowsPage { shows: vec![] });
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["flash"], "done");
        assert!(json["data"]["shows"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_error_page_payloads() {
        let page = ErrorPage::not_found();
        assert_eq!(page.status, 404);
        let page = ErrorPage::server_error();
        assert_eq!(page.status, 500);
    }
}
