//! 演出实体及联表查询行定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 演出
///
/// 纯关联实体：一个场馆和一个艺人在某个时间点的配对，
/// 只有创建操作，没有编辑/删除路由
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime<Utc>,
}

/// 新建演出的字段集
#[derive(Debug, Clone)]
pub struct NewShow {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime<Utc>,
}

/// 演出总列表行：演出 + 场馆名 + 艺人名/头像
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    #[sqlx(default)]
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// 场馆详情页的演出行：对端是艺人
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct VenueShowEntry {
    pub artist_id: i64,
    pub artist_name: String,
    #[sqlx(default)]
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// 艺人详情页的演出行：对端是场馆
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ArtistShowEntry {
    pub venue_id: i64,
    pub venue_name: String,
    #[sqlx(default)]
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}
