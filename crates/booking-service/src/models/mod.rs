//! 实体模型定义
//!
//! 场馆（Venue）、艺人（Artist）、演出（Show）三个实体，
//! 以及列表/详情页使用的联表查询行结构。

mod artist;
mod show;
mod venue;

pub use artist::{Artist, ArtistFields};
pub use show::{ArtistShowEntry, NewShow, Show, ShowListing, VenueShowEntry};
pub use venue::{Area, Venue, VenueFields};
