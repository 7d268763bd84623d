use std::sync::Arc;
use crate::domain::ports::{
    BandRepository, EntryRepository, EventRepository, LotteryRepository, MemberRepository,
    NoticeRepository,
};
use crate::domain::services::lottery::LotteryService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub member_repo: Arc<dyn MemberRepository>,
    pub band_repo: Arc<dyn BandRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub entry_repo: Arc<dyn EntryRepository>,
    pub lottery_repo: Arc<dyn LotteryRepository>,
    pub notice_repo: Arc<dyn NoticeRepository>,
    pub lottery_service: Arc<LotteryService>,
}
