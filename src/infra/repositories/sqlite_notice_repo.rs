use crate::domain::{models::notice::Notice, ports::NoticeRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteNoticeRepo {
    pool: SqlitePool,
}

impl SqliteNoticeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoticeRepository for SqliteNoticeRepo {
    async fn create(&self, notice: &Notice) -> Result<Notice, AppError> {
        sqlx::query_as::<_, Notice>(
            r#"INSERT INTO notices (id, title, body, created_by, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *"#,
        )
        .bind(&notice.id)
        .bind(&notice.title)
        .bind(&notice.body)
        .bind(&notice.created_by)
        .bind(notice.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Notice>, AppError> {
        sqlx::query_as::<_, Notice>("SELECT * FROM notices ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM notices WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
