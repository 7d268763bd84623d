use crate::domain::models::band::BandMember;
use crate::domain::models::entry::Song;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateMemberRequest {
    pub id: String,
    pub name: String,
    pub grade: String,
    #[serde(default)]
    pub part: String,
    pub group_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Deserialize)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub grade: Option<String>,
    pub part: Option<String>,
    pub group_name: Option<String>,
    pub roles: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct CreateBandRequest {
    pub name: String,
    pub status: Option<String>,
    #[serde(default)]
    pub members: Vec<BandMember>,
}

#[derive(Deserialize)]
pub struct UpdateBandRequest {
    pub name: Option<String>,
    pub status: Option<String>,
    pub members: Option<Vec<BandMember>>,
}

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub event_type: String,
    pub date: DateTime<Utc>,
    pub location: Option<String>,
    pub entry_start: Option<DateTime<Utc>>,
    pub entry_end: Option<DateTime<Utc>>,
    pub youtube_url: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub event_type: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub entry_start: Option<DateTime<Utc>>,
    pub entry_end: Option<DateTime<Utc>>,
    pub youtube_url: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateEntryRequest {
    pub band_id: Option<String>,
    #[serde(default)]
    pub songs: Vec<Song>,
}

#[derive(Deserialize)]
pub struct RunLotteryRequest {
    /// Competitive slots to award. Required, never defaulted.
    pub capacity: i64,
}

#[derive(Deserialize)]
pub struct CreateNoticeRequest {
    pub title: String,
    pub body: String,
}
