use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthMember;
use crate::api::dtos::requests::CreateNoticeRequest;
use crate::domain::models::notice::Notice;
use crate::domain::roles;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_notice(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Json(payload): Json<CreateNoticeRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !roles::has_permission(&caller.roles(), roles::PERM_NOTICE_EDIT) {
        return Err(AppError::Forbidden("Notice edit permission required".into()));
    }
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".into()));
    }

    let notice = Notice::new(payload.title, payload.body, caller.id);
    let created = state.notice_repo.create(&notice).await?;

    info!("Created notice: {}", created.id);
    Ok(Json(created))
}

pub async fn list_notices(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let notices = state.notice_repo.list().await?;
    Ok(Json(notices))
}

pub async fn delete_notice(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Path(notice_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !roles::is_admin(&caller.roles()) {
        return Err(AppError::Forbidden("Only admins may delete notices".into()));
    }

    state.notice_repo.delete(&notice_id).await?;
    info!("Deleted notice {}", notice_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
