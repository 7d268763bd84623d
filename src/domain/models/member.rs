use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub grade: String,
    pub part: String,
    pub group_name: Option<String>,
    pub roles_json: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewMemberParams {
    pub id: String,
    pub name: String,
    pub grade: String,
    pub part: String,
    pub group_name: Option<String>,
    pub roles: Vec<String>,
}

impl Member {
    pub fn new(params: NewMemberParams) -> Self {
        let now = Utc::now();
        Self {
            id: params.id,
            name: params.name,
            grade: params.grade,
            part: params.part,
            group_name: params.group_name,
            roles_json: serde_json::to_string(&params.roles).unwrap_or_else(|_| "[]".into()),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn roles(&self) -> Vec<String> {
        serde_json::from_str(&self.roles_json).unwrap_or_default()
    }
}
