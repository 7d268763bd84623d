use crate::domain::{models::member::Member, ports::MemberRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteMemberRepo {
    pool: SqlitePool,
}

impl SqliteMemberRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepo {
    async fn create(&self, member: &Member) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(
            r#"INSERT INTO members (
                id, name, grade, part, group_name, roles_json, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
        .bind(&member.id)
        .bind(&member.name)
        .bind(&member.grade)
        .bind(&member.part)
        .bind(&member.group_name)
        .bind(&member.roles_json)
        .bind(member.created_at)
        .bind(member.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Member>, AppError> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Member>, AppError> {
        sqlx::query_as::<_, Member>("SELECT * FROM members ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, member: &Member) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(
            r#"UPDATE members SET
                name = ?, grade = ?, part = ?, group_name = ?, roles_json = ?, updated_at = ?
            WHERE id = ?
            RETURNING *"#,
        )
        .bind(&member.name)
        .bind(&member.grade)
        .bind(&member.part)
        .bind(&member.group_name)
        .bind(&member.roles_json)
        .bind(member.updated_at)
        .bind(&member.id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
