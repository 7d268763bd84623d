use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Outcome for one entry considered by a lottery run.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LotteryResult {
    pub entry_id: String,
    pub band_id: String,
    pub band_name: String,
    pub status: String,
    pub exempt: bool,
}

/// One allocation run for one event. At most one row exists per event;
/// a re-run replaces the previous record. Results only propagate onto the
/// underlying entries when the lottery is approved.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Lottery {
    pub id: String,
    pub event_id: String,
    pub results_json: String,
    pub status: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Lottery {
    pub fn new(event_id: String, results: Vec<LotteryResult>, created_by: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            results_json: serde_json::to_string(&results).unwrap_or_else(|_| "[]".into()),
            status: "pending_approval".to_string(),
            created_by,
            created_at: Utc::now(),
        }
    }

    pub fn results(&self) -> Vec<LotteryResult> {
        serde_json::from_str(&self.results_json).unwrap_or_default()
    }

    pub fn is_pending(&self) -> bool {
        self.status == "pending_approval"
    }
}
