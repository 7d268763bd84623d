use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{band, entry, event, health, lottery, member, notice};
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Members
        .route("/api/v1/members", post(member::create_member).get(member::list_members))
        .route("/api/v1/members/{member_id}", get(member::get_member).put(member::update_member).delete(member::delete_member))

        // Bands
        .route("/api/v1/bands", post(band::create_band).get(band::list_bands))
        .route("/api/v1/bands/{band_id}", get(band::get_band).put(band::update_band).delete(band::delete_band))

        // Events
        .route("/api/v1/events", post(event::create_event).get(event::list_events))
        .route("/api/v1/events/{event_id}", get(event::get_event).put(event::update_event).delete(event::delete_event))

        // Entries
        .route("/api/v1/events/{event_id}/entries", post(entry::create_entry).get(entry::list_entries))
        .route("/api/v1/entries/{entry_id}", delete(entry::delete_entry))

        // Lottery
        .route("/api/v1/events/{event_id}/lottery", post(lottery::run_lottery).get(lottery::get_lottery))
        .route("/api/v1/lotteries/{lottery_id}/approve", post(lottery::approve_lottery))
        .route("/api/v1/lotteries/{lottery_id}/reject", post(lottery::reject_lottery))

        // Notices
        .route("/api/v1/notices", post(notice::create_notice).get(notice::list_notices))
        .route("/api/v1/notices/{notice_id}", delete(notice::delete_notice))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        member_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
