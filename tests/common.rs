use matching_backend::{
    api::router::create_router,
    config::Config,
    domain::services::lottery::LotteryService,
    infra::repositories::{
        sqlite_band_repo::SqliteBandRepo, sqlite_entry_repo::SqliteEntryRepo,
        sqlite_event_repo::SqliteEventRepo, sqlite_lottery_repo::SqliteLotteryRepo,
        sqlite_member_repo::SqliteMemberRepo, sqlite_notice_repo::SqliteNoticeRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let band_repo = Arc::new(SqliteBandRepo::new(pool.clone()));
        let entry_repo = Arc::new(SqliteEntryRepo::new(pool.clone()));
        let lottery_repo = Arc::new(SqliteLotteryRepo::new(pool.clone()));

        let lottery_service = Arc::new(LotteryService::new(
            entry_repo.clone(),
            band_repo.clone(),
            lottery_repo.clone(),
        ));

        let state = Arc::new(AppState {
            config,
            member_repo: Arc::new(SqliteMemberRepo::new(pool.clone())),
            band_repo,
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            entry_repo,
            lottery_repo,
            notice_repo: Arc::new(SqliteNoticeRepo::new(pool.clone())),
            lottery_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        member_id: Option<&str>,
        body: Option<Value>,
    ) -> (axum::http::StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(id) = member_id {
            builder = builder.header("X-Member-Id", id);
        }

        let body = match body {
            Some(v) => Body::from(v.to_string()),
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn seed_member(&self, id: &str, name: &str, roles: &[&str]) {
        let (status, _) = self
            .request(
                "POST",
                "/api/v1/members",
                None,
                Some(json!({
                    "id": id,
                    "name": name,
                    "grade": "2",
                    "part": "Gt",
                    "roles": roles,
                })),
            )
            .await;
        assert!(status.is_success(), "Failed to seed member {}", id);
    }

    /// Creates a band directly through the repository so tests can pin the
    /// band id.
    pub async fn seed_band(&self, id: &str, name: &str, status: &str, member_ids: &[&str]) {
        use matching_backend::domain::models::band::{Band, BandMember};

        let members: Vec<BandMember> = member_ids
            .iter()
            .map(|m| BandMember {
                member_id: m.to_string(),
                name: m.to_string(),
                part: "Gt".to_string(),
            })
            .collect();
        let mut band = Band::new(name.to_string(), status.to_string(), members);
        band.id = id.to_string();
        self.state
            .band_repo
            .create(&band)
            .await
            .expect("Failed to seed band");
    }

    /// Creates a live event with an open entry window and returns its id.
    pub async fn seed_live_event(&self, organizer_id: &str) -> String {
        let now = chrono::Utc::now();
        let (status, body) = self
            .request(
                "POST",
                "/api/v1/events",
                Some(organizer_id),
                Some(json!({
                    "name": "Summer Live",
                    "event_type": "live",
                    "date": (now + chrono::Duration::days(30)).to_rfc3339(),
                    "location": "Shibuya eggman",
                    "entry_start": (now - chrono::Duration::days(1)).to_rfc3339(),
                    "entry_end": (now + chrono::Duration::days(7)).to_rfc3339(),
                })),
            )
            .await;
        assert!(status.is_success(), "Failed to seed event: {:?}", body);
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn seed_entry(&self, event_id: &str, band_id: &str, member_id: &str) -> String {
        let (status, body) = self
            .request(
                "POST",
                &format!("/api/v1/events/{}/entries", event_id),
                Some(member_id),
                Some(json!({
                    "band_id": band_id,
                    "songs": [{"order": 1, "title": "Song", "artist": "Artist"}],
                })),
            )
            .await;
        assert!(status.is_success(), "Failed to seed entry: {:?}", body);
        body["id"].as_str().unwrap().to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
