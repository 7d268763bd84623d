use crate::domain::models::{
    band::Band, entry::Entry, event::ClubEvent, lottery::Lottery, member::Member, notice::Notice,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create(&self, member: &Member) -> Result<Member, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Member>, AppError>;
    async fn list(&self) -> Result<Vec<Member>, AppError>;
    async fn update(&self, member: &Member) -> Result<Member, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BandRepository: Send + Sync {
    async fn create(&self, band: &Band) -> Result<Band, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Band>, AppError>;
    async fn list(&self) -> Result<Vec<Band>, AppError>;
    async fn update(&self, band: &Band) -> Result<Band, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &ClubEvent) -> Result<ClubEvent, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ClubEvent>, AppError>;
    async fn list(&self) -> Result<Vec<ClubEvent>, AppError>;
    async fn update(&self, event: &ClubEvent) -> Result<ClubEvent, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn create(&self, entry: &Entry) -> Result<Entry, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Entry>, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Entry>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait LotteryRepository: Send + Sync {
    /// Save a freshly drawn lottery, replacing any prior record for the
    /// same event. At most one lottery row exists per event.
    async fn upsert(&self, lottery: &Lottery) -> Result<Lottery, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Lottery>, AppError>;
    async fn find_by_event(&self, event_id: &str) -> Result<Option<Lottery>, AppError>;
    /// Propagate every result status onto its entry and flip the lottery to
    /// approved, in a single transaction. Fails with a conflict if the
    /// lottery left the pending state since it was loaded.
    async fn approve(&self, lottery: &Lottery) -> Result<Lottery, AppError>;
    /// Flip the lottery to rejected. Entries are untouched.
    async fn reject(&self, lottery: &Lottery) -> Result<Lottery, AppError>;
}

#[async_trait]
pub trait NoticeRepository: Send + Sync {
    async fn create(&self, notice: &Notice) -> Result<Notice, AppError>;
    async fn list(&self) -> Result<Vec<Notice>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
