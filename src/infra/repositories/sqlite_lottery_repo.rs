use crate::domain::{models::lottery::Lottery, ports::LotteryRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteLotteryRepo {
    pool: SqlitePool,
}

impl SqliteLotteryRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LotteryRepository for SqliteLotteryRepo {
    async fn upsert(&self, lottery: &Lottery) -> Result<Lottery, AppError> {
        // One row per event: a re-run overwrites the previous record
        // entirely, last writer wins.
        sqlx::query_as::<_, Lottery>(
            r#"INSERT INTO lotteries (id, event_id, results_json, status, created_by, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(event_id) DO UPDATE SET
                id = excluded.id,
                results_json = excluded.results_json,
                status = excluded.status,
                created_by = excluded.created_by,
                created_at = excluded.created_at
            RETURNING *"#,
        )
        .bind(&lottery.id)
        .bind(&lottery.event_id)
        .bind(&lottery.results_json)
        .bind(&lottery.status)
        .bind(&lottery.created_by)
        .bind(lottery.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Lottery>, AppError> {
        sqlx::query_as::<_, Lottery>("SELECT * FROM lotteries WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_event(&self, event_id: &str) -> Result<Option<Lottery>, AppError> {
        sqlx::query_as::<_, Lottery>("SELECT * FROM lotteries WHERE event_id = ?")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn approve(&self, lottery: &Lottery) -> Result<Lottery, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        for result in lottery.results() {
            sqlx::query("UPDATE entries SET status = ? WHERE id = ?")
                .bind(&result.status)
                .bind(&result.entry_id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        // Guarded flip: a racing approval finds the row no longer pending
        // and the whole transaction, entry updates included, rolls back.
        let flipped = sqlx::query(
            "UPDATE lotteries SET status = 'approved' WHERE id = ? AND status = 'pending_approval'",
        )
        .bind(&lottery.id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        if flipped.rows_affected() != 1 {
            tx.rollback().await.map_err(AppError::Database)?;
            return Err(AppError::Conflict("Lottery was decided concurrently".into()));
        }

        tx.commit().await.map_err(AppError::Database)?;

        self.find_by_id(&lottery.id)
            .await?
            .ok_or(AppError::NotFound("Lottery not found".into()))
    }

    async fn reject(&self, lottery: &Lottery) -> Result<Lottery, AppError> {
        let flipped = sqlx::query(
            "UPDATE lotteries SET status = 'rejected' WHERE id = ? AND status = 'pending_approval'",
        )
        .bind(&lottery.id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if flipped.rows_affected() != 1 {
            return Err(AppError::Conflict("Lottery was decided concurrently".into()));
        }

        self.find_by_id(&lottery.id)
            .await?
            .ok_or(AppError::NotFound("Lottery not found".into()))
    }
}
