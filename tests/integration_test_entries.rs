mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::TestApp;
use serde_json::json;

async fn seed_base(app: &TestApp) {
    app.seed_member("organizer", "Organizer", &["partLeader"]).await;
    app.seed_member("m1", "M1", &[]).await;
    app.seed_member("outsider", "Outsider", &[]).await;
    app.seed_band("B1", "First Band", "closed", &["m1", "m2"]).await;
}

#[tokio::test]
async fn test_band_entry_records_snapshot_and_songs() {
    let app = TestApp::new().await;
    seed_base(&app).await;
    let event_id = app.seed_live_event("organizer").await;

    let (status, body) = app
        .request(
            "POST",
            &format!("/api/v1/events/{}/entries", event_id),
            Some("m1"),
            Some(json!({
                "band_id": "B1",
                "songs": [
                    {"order": 1, "title": "Opening", "artist": "Us"},
                    {"order": 2, "title": "Closer", "artist": "Them"}
                ],
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{:?}", body);
    assert_eq!(body["entry_type"], "band");
    assert_eq!(body["band_name"], "First Band");
    assert_eq!(body["status"], "entered");
    assert_eq!(body["songs"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_entry_outside_window_is_rejected() {
    let app = TestApp::new().await;
    seed_base(&app).await;

    let now = Utc::now();
    let (_, event) = app
        .request(
            "POST",
            "/api/v1/events",
            Some("organizer"),
            Some(json!({
                "name": "Past Live",
                "event_type": "live",
                "date": (now + Duration::days(30)).to_rfc3339(),
                "entry_start": (now - Duration::days(10)).to_rfc3339(),
                "entry_end": (now - Duration::days(3)).to_rfc3339(),
            })),
        )
        .await;
    let event_id = event["id"].as_str().unwrap();

    let (status, _) = app
        .request(
            "POST",
            &format!("/api/v1/events/{}/entries", event_id),
            Some("m1"),
            Some(json!({"band_id": "B1"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_event_without_window_never_accepts_entries() {
    let app = TestApp::new().await;
    seed_base(&app).await;

    let (_, event) = app
        .request(
            "POST",
            "/api/v1/events",
            Some("organizer"),
            Some(json!({
                "name": "No Window",
                "event_type": "live",
                "date": (Utc::now() + Duration::days(30)).to_rfc3339(),
            })),
        )
        .await;
    let event_id = event["id"].as_str().unwrap();

    let (status, _) = app
        .request(
            "POST",
            &format!("/api/v1/events/{}/entries", event_id),
            Some("m1"),
            Some(json!({"band_id": "B1"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recruiting_band_cannot_enter() {
    let app = TestApp::new().await;
    seed_base(&app).await;
    app.seed_band("B9", "Open Band", "recruiting", &["m1"]).await;
    let event_id = app.seed_live_event("organizer").await;

    let (status, _) = app
        .request(
            "POST",
            &format!("/api/v1/events/{}/entries", event_id),
            Some("m1"),
            Some(json!({"band_id": "B9"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_only_roster_members_may_enter_the_band() {
    let app = TestApp::new().await;
    seed_base(&app).await;
    let event_id = app.seed_live_event("organizer").await;

    let (status, _) = app
        .request(
            "POST",
            &format!("/api/v1/events/{}/entries", event_id),
            Some("outsider"),
            Some(json!({"band_id": "B1"})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_band_cannot_enter_twice() {
    let app = TestApp::new().await;
    seed_base(&app).await;
    let event_id = app.seed_live_event("organizer").await;
    app.seed_entry(&event_id, "B1", "m1").await;

    let (status, _) = app
        .request(
            "POST",
            &format!("/api/v1/events/{}/entries", event_id),
            Some("m1"),
            Some(json!({"band_id": "B1"})),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_live_event_requires_a_band() {
    let app = TestApp::new().await;
    seed_base(&app).await;
    let event_id = app.seed_live_event("organizer").await;

    let (status, _) = app
        .request(
            "POST",
            &format!("/api/v1/events/{}/entries", event_id),
            Some("m1"),
            Some(json!({})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_other_event_takes_individual_entries_once() {
    let app = TestApp::new().await;
    seed_base(&app).await;

    let now = Utc::now();
    let (_, event) = app
        .request(
            "POST",
            "/api/v1/events",
            Some("organizer"),
            Some(json!({
                "name": "Jam Session",
                "event_type": "other",
                "date": (now + Duration::days(14)).to_rfc3339(),
                "entry_start": (now - Duration::days(1)).to_rfc3339(),
                "entry_end": (now + Duration::days(7)).to_rfc3339(),
            })),
        )
        .await;
    let event_id = event["id"].as_str().unwrap();

    let (status, body) = app
        .request(
            "POST",
            &format!("/api/v1/events/{}/entries", event_id),
            Some("m1"),
            Some(json!({})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry_type"], "individual");
    assert_eq!(body["member_id"], "m1");

    let (status, _) = app
        .request(
            "POST",
            &format!("/api/v1/events/{}/entries", event_id),
            Some("m1"),
            Some(json!({})),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_withdrawing_entries() {
    let app = TestApp::new().await;
    seed_base(&app).await;
    let event_id = app.seed_live_event("organizer").await;
    let entry_id = app.seed_entry(&event_id, "B1", "m1").await;

    // A stranger cannot withdraw someone else's entry.
    let (status, _) = app
        .request(
            "DELETE",
            &format!("/api/v1/entries/{}", entry_id),
            Some("outsider"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The submitting member can.
    let (status, _) = app
        .request(
            "DELETE",
            &format!("/api/v1/entries/{}", entry_id),
            Some("m1"),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app
        .request(
            "GET",
            &format!("/api/v1/events/{}/entries", event_id),
            None,
            None,
        )
        .await;
    assert!(body.as_array().unwrap().is_empty());
}
