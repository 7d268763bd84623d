use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthMember;
use crate::api::dtos::{
    requests::{CreateBandRequest, UpdateBandRequest},
    responses::BandResponse,
};
use crate::domain::models::band::Band;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_band(
    State(state): State<Arc<AppState>>,
    AuthMember(_caller): AuthMember,
    Json(payload): Json<CreateBandRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Band name is required".into()));
    }

    let status = payload.status.unwrap_or_else(|| "recruiting".to_string());
    match status.as_str() {
        "recruiting" | "closed" => {}
        _ => return Err(AppError::Validation("Invalid band status".into())),
    }

    let band = Band::new(payload.name, status, payload.members);
    let created = state.band_repo.create(&band).await?;

    info!("Created band: {} ({})", created.name, created.id);
    Ok(Json(BandResponse::from(created)))
}

pub async fn list_bands(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let bands = state.band_repo.list().await?;
    let body: Vec<BandResponse> = bands.into_iter().map(BandResponse::from).collect();
    Ok(Json(body))
}

pub async fn get_band(
    State(state): State<Arc<AppState>>,
    Path(band_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let band = state
        .band_repo
        .find_by_id(&band_id)
        .await?
        .ok_or(AppError::NotFound("Band not found".into()))?;
    Ok(Json(BandResponse::from(band)))
}

pub async fn update_band(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Path(band_id): Path<String>,
    Json(payload): Json<UpdateBandRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut band = state
        .band_repo
        .find_by_id(&band_id)
        .await?
        .ok_or(AppError::NotFound("Band not found".into()))?;

    if !band.has_member(&caller.id) {
        return Err(AppError::Forbidden("Only band members may edit the band".into()));
    }

    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Band name is required".into()));
        }
        band.name = name;
    }
    if let Some(status) = payload.status {
        match status.as_str() {
            "recruiting" | "closed" => {}
            _ => return Err(AppError::Validation("Invalid band status".into())),
        }
        band.status = status;
    }
    if let Some(members) = payload.members {
        band.members_json =
            serde_json::to_string(&members).map_err(|_| AppError::Internal)?;
    }

    let updated = state.band_repo.update(&band).await?;
    info!("Updated band: {}", updated.id);
    Ok(Json(BandResponse::from(updated)))
}

pub async fn delete_band(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Path(band_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let band = state
        .band_repo
        .find_by_id(&band_id)
        .await?
        .ok_or(AppError::NotFound("Band not found".into()))?;

    if !band.has_member(&caller.id) {
        return Err(AppError::Forbidden("Only band members may delete the band".into()));
    }

    state.band_repo.delete(&band_id).await?;
    info!("Deleted band {}", band_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
