//! 数据访问层
//!
//! 所有读写都经由本层的仓储进入存储；handler 依赖 trait 抽象而非
//! 具体实现。所有变更操作都在一个事务作用域内执行：成功提交，
//! 失败整体回滚，连接随事务结束归还连接池。

mod artist_repo;
mod show_repo;
mod traits;
mod venue_repo;

pub use artist_repo::PgArtistRepository;
pub use show_repo::PgShowRepository;
pub use traits::{ArtistRepository, ShowRepository, VenueRepository};
pub use venue_repo::PgVenueRepository;

#[cfg(test)]
pub use traits::{MockArtistRepository, MockShowRepository, MockVenueRepository};
