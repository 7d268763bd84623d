use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Song {
    pub order: i32,
    pub title: String,
    pub artist: String,
}

/// One application to perform at an event. Live events take band entries,
/// other events take individual entries; only band entries ever reach the
/// lottery.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Entry {
    pub id: String,
    pub event_id: String,
    pub entry_type: String,
    pub band_id: Option<String>,
    pub band_name: Option<String>,
    pub member_id: String,
    pub member_name: String,
    pub songs_json: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewEntryParams {
    pub event_id: String,
    pub entry_type: String,
    pub band_id: Option<String>,
    pub band_name: Option<String>,
    pub member_id: String,
    pub member_name: String,
    pub songs: Vec<Song>,
}

impl Entry {
    pub fn new(params: NewEntryParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id: params.event_id,
            entry_type: params.entry_type,
            band_id: params.band_id,
            band_name: params.band_name,
            member_id: params.member_id,
            member_name: params.member_name,
            songs_json: serde_json::to_string(&params.songs).unwrap_or_else(|_| "[]".into()),
            status: "entered".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn songs(&self) -> Vec<Song> {
        serde_json::from_str(&self.songs_json).unwrap_or_default()
    }
}
