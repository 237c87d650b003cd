//! 艺人实体定义

use serde::{Deserialize, Serialize};

/// 艺人
///
/// 演出表演者，持有零个或多个演出（shows.artist_id 外键关联）
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    #[sqlx(default)]
    pub phone: Option<String>,
    /// 演出风格标签，自由文本，保持提交顺序
    pub genres: Vec<String>,
    #[sqlx(default)]
    pub image_link: Option<String>,
    #[sqlx(default)]
    pub facebook_link: Option<String>,
    #[sqlx(default)]
    pub website_link: Option<String>,
    /// 是否在寻找场馆，未设置时默认 true
    pub seeking_venue: bool,
    #[sqlx(default)]
    pub seeking_description: Option<String>,
}

/// 艺人可编辑字段集
///
/// 创建时整体写入，编辑时整体替换（last-write-wins，无冲突检测）
#[derive(Debug, Clone, Default)]
pub struct ArtistFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}
