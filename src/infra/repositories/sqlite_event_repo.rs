use crate::domain::{models::event::ClubEvent, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepo {
    async fn create(&self, event: &ClubEvent) -> Result<ClubEvent, AppError> {
        sqlx::query_as::<_, ClubEvent>(
            r#"INSERT INTO events (
                id, name, event_type, date, location, entry_start, entry_end, youtube_url, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
        .bind(&event.id)
        .bind(&event.name)
        .bind(&event.event_type)
        .bind(event.date)
        .bind(&event.location)
        .bind(event.entry_start)
        .bind(event.entry_end)
        .bind(&event.youtube_url)
        .bind(event.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ClubEvent>, AppError> {
        sqlx::query_as::<_, ClubEvent>("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<ClubEvent>, AppError> {
        sqlx::query_as::<_, ClubEvent>("SELECT * FROM events ORDER BY date ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, event: &ClubEvent) -> Result<ClubEvent, AppError> {
        sqlx::query_as::<_, ClubEvent>(
            r#"UPDATE events SET
                name = ?, event_type = ?, date = ?, location = ?,
                entry_start = ?, entry_end = ?, youtube_url = ?
            WHERE id = ?
            RETURNING *"#,
        )
        .bind(&event.name)
        .bind(&event.event_type)
        .bind(event.date)
        .bind(&event.location)
        .bind(event.entry_start)
        .bind(event.entry_end)
        .bind(&event.youtube_url)
        .bind(&event.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
