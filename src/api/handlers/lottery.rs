use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthMember;
use crate::api::dtos::{requests::RunLotteryRequest, responses::LotteryResponse};
use crate::error::AppError;
use std::sync::Arc;

pub async fn run_lottery(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Path(event_id): Path<String>,
    Json(payload): Json<RunLotteryRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .event_repo
        .find_by_id(&event_id)
        .await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let lottery = state
        .lottery_service
        .run(&event_id, payload.capacity, &caller)
        .await?;
    Ok(Json(LotteryResponse::from(lottery)))
}

pub async fn get_lottery(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let lottery = state
        .lottery_repo
        .find_by_event(&event_id)
        .await?
        .ok_or(AppError::NotFound("No lottery for this event".into()))?;
    Ok(Json(LotteryResponse::from(lottery)))
}

pub async fn approve_lottery(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Path(lottery_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let lottery = state.lottery_service.approve(&lottery_id, &caller).await?;
    Ok(Json(LotteryResponse::from(lottery)))
}

pub async fn reject_lottery(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Path(lottery_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let lottery = state.lottery_service.reject(&lottery_id, &caller).await?;
    Ok(Json(LotteryResponse::from(lottery)))
}
