use crate::domain::{models::band::Band, ports::BandRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteBandRepo {
    pool: SqlitePool,
}

impl SqliteBandRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BandRepository for SqliteBandRepo {
    async fn create(&self, band: &Band) -> Result<Band, AppError> {
        sqlx::query_as::<_, Band>(
            r#"INSERT INTO bands (id, name, status, members_json, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *"#,
        )
        .bind(&band.id)
        .bind(&band.name)
        .bind(&band.status)
        .bind(&band.members_json)
        .bind(band.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Band>, AppError> {
        sqlx::query_as::<_, Band>("SELECT * FROM bands WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Band>, AppError> {
        sqlx::query_as::<_, Band>("SELECT * FROM bands ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, band: &Band) -> Result<Band, AppError> {
        sqlx::query_as::<_, Band>(
            r#"UPDATE bands SET name = ?, status = ?, members_json = ?
            WHERE id = ?
            RETURNING *"#,
        )
        .bind(&band.name)
        .bind(&band.status)
        .bind(&band.members_json)
        .bind(&band.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM bands WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
