//! 场馆实体定义

use serde::{Deserialize, Serialize};

/// 场馆
///
/// 演出举办地，持有零个或多个演出（shows.venue_id 外键关联）
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    #[sqlx(default)]
    pub address: Option<String>,
    #[sqlx(default)]
    pub phone: Option<String>,
    #[sqlx(default)]
    pub image_link: Option<String>,
    #[sqlx(default)]
    pub facebook_link: Option<String>,
    /// 演出风格标签，自由文本，保持提交顺序
    pub genres: Vec<String>,
    #[sqlx(default)]
    pub website_link: Option<String>,
    /// 是否在招募艺人，未设置时默认 false
    pub seeking_talent: bool,
    #[sqlx(default)]
    pub seeking_description: Option<String>,
}

/// 场馆可编辑字段集
///
/// 创建时整体写入，编辑时整体替换（last-write-wins，无冲突检测）
#[derive(Debug, Clone, Default)]
pub struct VenueFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// 城市/州二元组，用于场馆列表页的区域分组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub city: String,
    pub state: String,
}
