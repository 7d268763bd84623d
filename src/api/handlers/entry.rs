use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthMember;
use crate::api::dtos::{requests::CreateEntryRequest, responses::EntryResponse};
use crate::domain::models::entry::{Entry, NewEntryParams};
use crate::domain::roles;
use crate::error::AppError;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Path(event_id): Path<String>,
    Json(payload): Json<CreateEntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event_repo
        .find_by_id(&event_id)
        .await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if !event.is_entry_open(Utc::now()) {
        return Err(AppError::Validation("Entry window is not open".into()));
    }

    let entry = if event.is_live() {
        let band_id = payload
            .band_id
            .ok_or(AppError::Validation("Live events require a band entry".into()))?;

        let band = state
            .band_repo
            .find_by_id(&band_id)
            .await?
            .ok_or(AppError::NotFound("Band not found".into()))?;

        if band.status != "closed" {
            return Err(AppError::Validation(
                "Only closed bands may enter a live event".into(),
            ));
        }
        if !band.has_member(&caller.id) {
            return Err(AppError::Forbidden(
                "Only band members may enter the band".into(),
            ));
        }

        let existing = state.entry_repo.list_by_event(&event_id).await?;
        if existing
            .iter()
            .any(|e| e.band_id.as_deref() == Some(band.id.as_str()))
        {
            return Err(AppError::Conflict("Band already entered this event".into()));
        }

        Entry::new(NewEntryParams {
            event_id,
            entry_type: "band".to_string(),
            band_id: Some(band.id.clone()),
            band_name: Some(band.name.clone()),
            member_id: caller.id.clone(),
            member_name: caller.name.clone(),
            songs: payload.songs,
        })
    } else {
        let existing = state.entry_repo.list_by_event(&event_id).await?;
        if existing.iter().any(|e| e.member_id == caller.id) {
            return Err(AppError::Conflict("Already entered this event".into()));
        }

        Entry::new(NewEntryParams {
            event_id,
            entry_type: "individual".to_string(),
            band_id: None,
            band_name: None,
            member_id: caller.id.clone(),
            member_name: caller.name.clone(),
            songs: vec![],
        })
    };

    let created = state.entry_repo.create(&entry).await?;
    info!(
        "Created {} entry {} for event {}",
        created.entry_type, created.id, created.event_id
    );
    Ok(Json(EntryResponse::from(created)))
}

pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .event_repo
        .find_by_id(&event_id)
        .await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let entries = state.entry_repo.list_by_event(&event_id).await?;
    let body: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();
    Ok(Json(body))
}

pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Path(entry_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state
        .entry_repo
        .find_by_id(&entry_id)
        .await?
        .ok_or(AppError::NotFound("Entry not found".into()))?;

    let own = entry.member_id == caller.id;
    if !own && !roles::has_permission(&caller.roles(), roles::PERM_EVENT_EDIT) {
        return Err(AppError::Forbidden("Cannot withdraw another member's entry".into()));
    }

    state.entry_repo.delete(&entry_id).await?;
    info!("Deleted entry {}", entry_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
