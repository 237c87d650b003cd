//! 演出仓储的 PostgreSQL 实现
//!
//! 列表查询都是显式 JOIN；实体不携带会隐式触发额外查询的
//! 反向引用集合

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use super::traits::ShowRepository;
use crate::error::Result;
use crate::models::{ArtistShowEntry, NewShow, Show, ShowListing, VenueShowEntry};

/// 演出仓储
pub struct PgShowRepository {
    pool: PgPool,
}

impl PgShowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShowRepository for PgShowRepository {
    async fn list(&self) -> Result<Vec<ShowListing>> {
        let shows = sqlx::query_as::<_, ShowListing>(
            r#"
            SELECT s.venue_id,
                   v.name AS venue_name,
                   s.artist_id,
                   a.name AS artist_name,
                   a.image_link AS artist_image_link,
                   s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            JOIN artists a ON a.id = s.artist_id
            ORDER BY s.start_time
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(shows)
    }

    async fn list_for_venue(&self, venue_id: i64) -> Result<Vec<VenueShowEntry>> {
        let shows = sqlx::query_as::<_, VenueShowEntry>(
            r#"
            SELECT s.artist_id,
                   a.name AS artist_name,
                   a.image_link AS artist_image_link,
                   s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            WHERE s.venue_id = $1
            ORDER BY s.start_time
            "#,
        )
        .bind(venue_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(shows)
    }

    async fn list_for_artist(&self, artist_id: i64) -> Result<Vec<ArtistShowEntry>> {
        let shows = sqlx::query_as::<_, ArtistShowEntry>(
            r#"
            SELECT s.venue_id,
                   v.name AS venue_name,
                   v.image_link AS venue_image_link,
                   s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            WHERE s.artist_id = $1
            ORDER BY s.start_time
            "#,
        )
        .bind(artist_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(shows)
    }

    async fn create(&self, new_show: &NewShow) -> Result<Show> {
        let mut tx = self.pool.begin().await?;

        // 外键约束在这里拦截悬空的 venue_id/artist_id，
        // 错误向上抛给 handler 转成失败 flash
        let show = sqlx::query_as::<_, Show>(
            r#"
            INSERT INTO shows (venue_id, artist_id, start_time)
            VALUES ($1, $2, $3)
            RETURNING id, venue_id, artist_id, start_time
            "#,
        )
        .bind(new_show.venue_id)
        .bind(new_show.artist_id)
        .bind(new_show.start_time)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        info!(
            show_id = show.id,
            venue_id = show.venue_id,
            artist_id = show.artist_id,
            "Show created"
        );

        Ok(show)
    }
}
