pub mod sqlite_member_repo;
pub mod sqlite_band_repo;
pub mod sqlite_event_repo;
pub mod sqlite_entry_repo;
pub mod sqlite_lottery_repo;
pub mod sqlite_notice_repo;
