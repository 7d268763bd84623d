use crate::domain::{models::entry::Entry, ports::EntryRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEntryRepo {
    pool: SqlitePool,
}

impl SqliteEntryRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryRepository for SqliteEntryRepo {
    async fn create(&self, entry: &Entry) -> Result<Entry, AppError> {
        sqlx::query_as::<_, Entry>(
            r#"INSERT INTO entries (
                id, event_id, entry_type, band_id, band_name,
                member_id, member_name, songs_json, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
        .bind(&entry.id)
        .bind(&entry.event_id)
        .bind(&entry.entry_type)
        .bind(&entry.band_id)
        .bind(&entry.band_name)
        .bind(&entry.member_id)
        .bind(&entry.member_name)
        .bind(&entry.songs_json)
        .bind(&entry.status)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Entry>, AppError> {
        sqlx::query_as::<_, Entry>("SELECT * FROM entries WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Entry>, AppError> {
        sqlx::query_as::<_, Entry>(
            "SELECT * FROM entries WHERE event_id = ? ORDER BY created_at ASC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM entries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
