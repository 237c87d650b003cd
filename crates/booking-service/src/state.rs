//! 应用状态定义
//!
//! 仓储句柄在启动时显式构造后注入状态，handler 只见 trait 对象，
//! 不存在模块级的全局存储句柄。

use std::sync::Arc;

use sqlx::PgPool;

use crate::repository::{
    ArtistRepository, PgArtistRepository, PgShowRepository, PgVenueRepository, ShowRepository,
    VenueRepository,
};

/// Axum 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub venues: Arc<dyn VenueRepository>,
    pub artists: Arc<dyn ArtistRepository>,
    pub shows: Arc<dyn ShowRepository>,
}

impl AppState {
    /// 用 PostgreSQL 仓储实现构造状态
    pub fn new(pool: PgPool) -> Self {
        Self {
            venues: Arc::new(PgVenueRepository::new(pool.clone())),
            artists: Arc::new(PgArtistRepository::new(pool.clone())),
            shows: Arc::new(PgShowRepository::new(pool)),
        }
    }

    /// 注入任意仓储实现（测试用 mock）
    pub fn with_repositories(
        venues: Arc<dyn VenueRepository>,
        artists: Arc<dyn ArtistRepository>,
        shows: Arc<dyn ShowRepository>,
    ) -> Self {
        Self {
            venues,
            artists,
            shows,
        }
    }
}
