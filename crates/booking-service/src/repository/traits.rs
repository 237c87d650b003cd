//! 仓储 Trait 定义
//!
//! handler 依赖这些接口而非具体实现，便于 mock 测试

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    Area, Artist, ArtistFields, ArtistShowEntry, NewShow, Show, ShowListing, Venue, VenueFields,
    VenueShowEntry,
};

/// 场馆仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// 列出全部场馆
    async fn list(&self) -> Result<Vec<Venue>>;
    /// 按 id 获取，不存在返回 None，由调用方处理
    async fn get(&self, id: i64) -> Result<Option<Venue>>;
    /// 名称大小写不敏感子串匹配；空串匹配全部
    async fn search(&self, term: &str) -> Result<Vec<Venue>>;
    /// 去重的 (city, state) 组合，用于区域分组
    async fn distinct_areas(&self) -> Result<Vec<Area>>;
    async fn create(&self, fields: &VenueFields) -> Result<Venue>;
    /// 整体替换可编辑字段
    async fn update(&self, id: i64, fields: &VenueFields) -> Result<Venue>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// 艺人仓储接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Artist>>;
    async fn get(&self, id: i64) -> Result<Option<Artist>>;
    async fn search(&self, term: &str) -> Result<Vec<Artist>>;
    async fn create(&self, fields: &ArtistFields) -> Result<Artist>;
    async fn update(&self, id: i64, fields: &ArtistFields) -> Result<Artist>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// 演出仓储接口
///
/// 演出只有创建和联表读取；按当前时间切分今后/过往由 handler 完成
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShowRepository: Send + Sync {
    /// 全部演出，联场馆名和艺人名/头像
    async fn list(&self) -> Result<Vec<ShowListing>>;
    /// 某场馆的演出，联对端艺人名/头像
    async fn list_for_venue(&self, venue_id: i64) -> Result<Vec<VenueShowEntry>>;
    /// 某艺人的演出，联对端场馆名/图片
    async fn list_for_artist(&self, artist_id: i64) -> Result<Vec<ArtistShowEntry>>;
    async fn create(&self, new_show: &NewShow) -> Result<Show>;
}
