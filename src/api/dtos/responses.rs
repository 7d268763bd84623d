use crate::domain::models::{
    band::{Band, BandMember},
    entry::{Entry, Song},
    lottery::{Lottery, LotteryResult},
    member::Member,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    pub grade: String,
    pub part: String,
    pub group_name: Option<String>,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(m: Member) -> Self {
        let roles = m.roles();
        Self {
            id: m.id,
            name: m.name,
            grade: m.grade,
            part: m.part,
            group_name: m.group_name,
            roles,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct BandResponse {
    pub id: String,
    pub name: String,
    pub status: String,
    pub members: Vec<BandMember>,
    pub created_at: DateTime<Utc>,
}

impl From<Band> for BandResponse {
    fn from(b: Band) -> Self {
        let members = b.members();
        Self {
            id: b.id,
            name: b.name,
            status: b.status,
            members,
            created_at: b.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct EntryResponse {
    pub id: String,
    pub event_id: String,
    pub entry_type: String,
    pub band_id: Option<String>,
    pub band_name: Option<String>,
    pub member_id: String,
    pub member_name: String,
    pub songs: Vec<Song>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Entry> for EntryResponse {
    fn from(e: Entry) -> Self {
        let songs = e.songs();
        Self {
            id: e.id,
            event_id: e.event_id,
            entry_type: e.entry_type,
            band_id: e.band_id,
            band_name: e.band_name,
            member_id: e.member_id,
            member_name: e.member_name,
            songs,
            status: e.status,
            created_at: e.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct LotteryResponse {
    pub id: String,
    pub event_id: String,
    pub results: Vec<LotteryResult>,
    pub status: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl From<Lottery> for LotteryResponse {
    fn from(l: Lottery) -> Self {
        let results = l.results();
        Self {
            id: l.id,
            event_id: l.event_id,
            results,
            status: l.status,
            created_by: l.created_by,
            created_at: l.created_at,
        }
    }
}
