use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One seat on a band's roster. A member may sit on any number of rosters;
/// lottery exemption depends on that count across the whole directory.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BandMember {
    pub member_id: String,
    pub name: String,
    pub part: String,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Band {
    pub id: String,
    pub name: String,
    pub status: String,
    pub members_json: String,
    pub created_at: DateTime<Utc>,
}

impl Band {
    pub fn new(name: String, status: String, members: Vec<BandMember>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            status,
            members_json: serde_json::to_string(&members).unwrap_or_else(|_| "[]".into()),
            created_at: Utc::now(),
        }
    }

    pub fn members(&self) -> Vec<BandMember> {
        serde_json::from_str(&self.members_json).unwrap_or_default()
    }

    pub fn has_member(&self, member_id: &str) -> bool {
        self.members().iter().any(|m| m.member_id == member_id)
    }
}
