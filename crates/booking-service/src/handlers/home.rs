//! 首页与错误页处理器

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::CookieJar;

use crate::dto::{ErrorPage, Page};
use crate::flash;

/// 首页
///
/// GET /
pub async fn index(jar: CookieJar) -> impl IntoResponse {
    let (jar, pending) = flash::take(jar);
    (jar, Json(Page::new(pending, serde_json::json!({}))))
}

/// 未匹配路由的 404 页面
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorPage::not_found()))
}
