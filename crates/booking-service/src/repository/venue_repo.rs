//! 场馆仓储的 PostgreSQL 实现

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use super::traits::VenueRepository;
use crate::error::Result;
use crate::models::{Area, Venue, VenueFields};

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
                             genres, website_link, seeking_talent, seeking_description";

/// 场馆仓储
pub struct PgVenueRepository {
    pool: PgPool,
}

impl PgVenueRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueRepository for PgVenueRepository {
    async fn list(&self) -> Result<Vec<Venue>> {
        let venues = sqlx::query_as::<_, Venue>(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(venues)
    }

    async fn get(&self, id: i64) -> Result<Option<Venue>> {
        let venue = sqlx::query_as::<_, Venue>(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(venue)
    }

    async fn search(&self, term: &str) -> Result<Vec<Venue>> {
        // ILIKE '%%' 对空搜索词匹配全部
        let venues = sqlx::query_as::<_, Venue>(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues WHERE name ILIKE '%' || $1 || '%' ORDER BY id"
        ))
        .bind(term)
        .fetch_all(&self.pool)
        .await?;

        Ok(venues)
    }

    async fn distinct_areas(&self) -> Result<Vec<Area>> {
        let areas = sqlx::query_as::<_, Area>(
            "SELECT DISTINCT city, state FROM venues ORDER BY state, city",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(areas)
    }

    async fn create(&self, fields: &VenueFields) -> Result<Venue> {
        let mut tx = self.pool.begin().await?;

        let venue = sqlx::query_as::<_, Venue>(&format!(
            r#"
            INSERT INTO venues (name, city, state, address, phone, image_link,
                                facebook_link, genres, website_link, seeking_talent,
                                seeking_description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {VENUE_COLUMNS}
            "#
        ))
        .bind(&fields.name)
        .bind(&fields.city)
        .bind(&fields.state)
        .bind(&fields.address)
        .bind(&fields.phone)
        .bind(&fields.image_link)
        .bind(&fields.facebook_link)
        .bind(&fields.genres)
        .bind(&fields.website_link)
        .bind(fields.seeking_talent)
        .bind(&fields.seeking_description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        info!(venue_id = venue.id, name = %venue.name, "Venue created");

        Ok(venue)
    }

    async fn update(&self, id: i64, fields: &VenueFields) -> Result<Venue> {
        let mut tx = self.pool.begin().await?;

        let venue = sqlx::query_as::<_, Venue>(&format!(
            r#"
            UPDATE venues
            SET name = $2, city = $3, state = $4, address = $5, phone = $6,
                image_link = $7, facebook_link = $8, genres = $9,
                website_link = $10, seeking_talent = $11, seeking_description = $12
            WHERE id = $1
            RETURNING {VENUE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.city)
        .bind(&fields.state)
        .bind(&fields.address)
        .bind(&fields.phone)
        .bind(&fields.image_link)
        .bind(&fields.facebook_link)
        .bind(&fields.genres)
        .bind(&fields.website_link)
        .bind(fields.seeking_talent)
        .bind(&fields.seeking_description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        info!(venue_id = id, "Venue updated");

        Ok(venue)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        info!(venue_id = id, "Venue deleted");

        Ok(())
    }
}
