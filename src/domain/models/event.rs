use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ClubEvent {
    pub id: String,
    pub name: String,
    pub event_type: String,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub entry_start: Option<DateTime<Utc>>,
    pub entry_end: Option<DateTime<Utc>>,
    pub youtube_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewEventParams {
    pub name: String,
    pub event_type: String,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub entry_start: Option<DateTime<Utc>>,
    pub entry_end: Option<DateTime<Utc>>,
    pub youtube_url: Option<String>,
}

impl ClubEvent {
    pub fn new(params: NewEventParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            event_type: params.event_type,
            date: params.date,
            location: params.location,
            entry_start: params.entry_start,
            entry_end: params.entry_end,
            youtube_url: params.youtube_url,
            created_at: Utc::now(),
        }
    }

    pub fn is_live(&self) -> bool {
        self.event_type == "live"
    }

    /// Entries are only accepted while the configured window is open.
    /// Events without a window never accept entries.
    pub fn is_entry_open(&self, now: DateTime<Utc>) -> bool {
        match (self.entry_start, self.entry_end) {
            (Some(start), Some(end)) => now >= start && now <= end,
            _ => false,
        }
    }
}
