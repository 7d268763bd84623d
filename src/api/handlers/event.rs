use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthMember;
use crate::api::dtos::requests::{CreateEventRequest, UpdateEventRequest};
use crate::domain::models::event::{ClubEvent, NewEventParams};
use crate::domain::roles;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

fn validate_event_type(event_type: &str) -> Result<(), AppError> {
    match event_type {
        "live" | "other" => Ok(()),
        _ => Err(AppError::Validation("Invalid event_type".into())),
    }
}

fn require_event_edit(caller: &crate::domain::models::member::Member) -> Result<(), AppError> {
    if !roles::has_permission(&caller.roles(), roles::PERM_EVENT_EDIT) {
        return Err(AppError::Forbidden("Event edit permission required".into()));
    }
    Ok(())
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_event_edit(&caller)?;
    validate_event_type(&payload.event_type)?;

    if let (Some(start), Some(end)) = (payload.entry_start, payload.entry_end) {
        if end < start {
            return Err(AppError::Validation(
                "Entry window end must be after start".into(),
            ));
        }
    }

    let event = ClubEvent::new(NewEventParams {
        name: payload.name,
        event_type: payload.event_type,
        date: payload.date,
        location: payload.location,
        entry_start: payload.entry_start,
        entry_end: payload.entry_end,
        youtube_url: payload.youtube_url,
    });
    let created = state.event_repo.create(&event).await?;

    info!("Created event: {} ({})", created.name, created.id);
    Ok(Json(created))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list().await?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event_repo
        .find_by_id(&event_id)
        .await?
        .ok_or(AppError::NotFound("Event not found".into()))?;
    Ok(Json(event))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Path(event_id): Path<String>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    require_event_edit(&caller)?;

    let mut event = state
        .event_repo
        .find_by_id(&event_id)
        .await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if let Some(name) = payload.name {
        event.name = name;
    }
    if let Some(event_type) = payload.event_type {
        validate_event_type(&event_type)?;
        event.event_type = event_type;
    }
    if let Some(date) = payload.date {
        event.date = date;
    }
    if let Some(location) = payload.location {
        event.location = Some(location);
    }
    if let Some(entry_start) = payload.entry_start {
        event.entry_start = Some(entry_start);
    }
    if let Some(entry_end) = payload.entry_end {
        event.entry_end = Some(entry_end);
    }
    if let Some(youtube_url) = payload.youtube_url {
        event.youtube_url = Some(youtube_url);
    }

    if let (Some(start), Some(end)) = (event.entry_start, event.entry_end) {
        if end < start {
            return Err(AppError::Validation(
                "Entry window end must be after start".into(),
            ));
        }
    }

    let updated = state.event_repo.update(&event).await?;
    info!("Updated event: {}", updated.id);
    Ok(Json(updated))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_event_edit(&caller)?;

    state
        .event_repo
        .find_by_id(&event_id)
        .await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    state.event_repo.delete(&event_id).await?;
    info!("Deleted event {}", event_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
