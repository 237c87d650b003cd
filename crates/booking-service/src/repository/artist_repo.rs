//! 艺人仓储的 PostgreSQL 实现

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use super::traits::ArtistRepository;
use crate::error::Result;
use crate::models::{Artist, ArtistFields};

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
                              website_link, seeking_venue, seeking_description";

/// 艺人仓储
pub struct PgArtistRepository {
    pool: PgPool,
}

impl PgArtistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtistRepository for PgArtistRepository {
    async fn list(&self) -> Result<Vec<Artist>> {
        let artists = sqlx::query_as::<_, Artist>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(artists)
    }

    async fn get(&self, id: i64) -> Result<Option<Artist>> {
        let artist = sqlx::query_as::<_, Artist>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(artist)
    }

    async fn search(&self, term: &str) -> Result<Vec<Artist>> {
        let artists = sqlx::query_as::<_, Artist>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists WHERE name ILIKE '%' || $1 || '%' ORDER BY id"
        ))
        .bind(term)
        .fetch_all(&self.pool)
        .await?;

        Ok(artists)
    }

    async fn create(&self, fields: &ArtistFields) -> Result<Artist> {
        let mut tx = self.pool.begin().await?;

        let artist = sqlx::query_as::<_, Artist>(&format!(
            r#"
            INSERT INTO artists (name, city, state, phone, genres, image_link,
                                 facebook_link, website_link, seeking_venue,
                                 seeking_description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {ARTIST_COLUMNS}
            "#
        ))
        .bind(&fields.name)
        .bind(&fields.city)
        .bind(&fields.state)
        .bind(&fields.phone)
        .bind(&fields.genres)
        .bind(&fields.image_link)
        .bind(&fields.facebook_link)
        .bind(&fields.website_link)
        .bind(fields.seeking_venue)
        .bind(&fields.seeking_description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        info!(artist_id = artist.id, name = %artist.name, "Artist created");

        Ok(artist)
    }

    async fn update(&self, id: i64, fields: &ArtistFields) -> Result<Artist> {
        let mut tx = self.pool.begin().await?;

        let artist = sqlx::query_as::<_, Artist>(&format!(
            r#"
            UPDATE artists
            SET name = $2, city = $3, state = $4, phone = $5, genres = $6,
                image_link = $7, facebook_link = $8, website_link = $9,
                seeking_venue = $10, seeking_description = $11
            WHERE id = $1
            RETURNING {ARTIST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.city)
        .bind(&fields.state)
        .bind(&fields.phone)
        .bind(&fields.genres)
        .bind(&fields.image_link)
        .bind(&fields.facebook_link)
        .bind(&fields.website_link)
        .bind(fields.seeking_venue)
        .bind(&fields.seeking_description)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        info!(artist_id = id, "Artist updated");

        Ok(artist)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        info!(artist_id = id, "Artist deleted");

        Ok(())
    }
}
