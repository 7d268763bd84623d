use std::str::FromStr;
use std::sync::Arc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::info;

use crate::config::Config;
use crate::domain::services::lottery::LotteryService;
use crate::infra::repositories::{
    sqlite_band_repo::SqliteBandRepo, sqlite_entry_repo::SqliteEntryRepo,
    sqlite_event_repo::SqliteEventRepo, sqlite_lottery_repo::SqliteLotteryRepo,
    sqlite_member_repo::SqliteMemberRepo, sqlite_notice_repo::SqliteNoticeRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection...");

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite URL")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to connect to SQLite");

    sqlx::migrate!("./migrations/sqlite")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let band_repo = Arc::new(SqliteBandRepo::new(pool.clone()));
    let entry_repo = Arc::new(SqliteEntryRepo::new(pool.clone()));
    let lottery_repo = Arc::new(SqliteLotteryRepo::new(pool.clone()));

    let lottery_service = Arc::new(LotteryService::new(
        entry_repo.clone(),
        band_repo.clone(),
        lottery_repo.clone(),
    ));

    AppState {
        config: config.clone(),
        member_repo: Arc::new(SqliteMemberRepo::new(pool.clone())),
        band_repo,
        event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
        entry_repo,
        lottery_repo,
        notice_repo: Arc::new(SqliteNoticeRepo::new(pool)),
        lottery_service,
    }
}
