use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthMember;
use crate::api::dtos::{
    requests::{CreateMemberRequest, UpdateMemberRequest},
    responses::MemberResponse,
};
use crate::domain::models::member::{Member, NewMemberParams};
use crate::domain::roles;
use crate::error::AppError;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

fn validate_roles(requested: &[String]) -> Result<(), AppError> {
    if let Some(bad) = requested.iter().find(|r| !roles::is_known_role(r)) {
        return Err(AppError::Validation(format!("Unknown role: {}", bad)));
    }
    Ok(())
}

pub async fn create_member(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.id.trim().is_empty() || payload.name.trim().is_empty() {
        return Err(AppError::Validation("id and name are required".into()));
    }
    validate_roles(&payload.roles)?;

    if state.member_repo.find_by_id(&payload.id).await?.is_some() {
        return Err(AppError::Conflict("Member id already exists".into()));
    }

    let member = Member::new(NewMemberParams {
        id: payload.id,
        name: payload.name,
        grade: payload.grade,
        part: payload.part,
        group_name: payload.group_name,
        roles: payload.roles,
    });
    let created = state.member_repo.create(&member).await?;

    info!("Created member: {}", created.id);
    Ok(Json(MemberResponse::from(created)))
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let members = state.member_repo.list().await?;
    let body: Vec<MemberResponse> = members.into_iter().map(MemberResponse::from).collect();
    Ok(Json(body))
}

pub async fn get_member(
    State(state): State<Arc<AppState>>,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let member = state
        .member_repo
        .find_by_id(&member_id)
        .await?
        .ok_or(AppError::NotFound("Member not found".into()))?;
    Ok(Json(MemberResponse::from(member)))
}

pub async fn update_member(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Path(member_id): Path<String>,
    Json(payload): Json<UpdateMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    // Members edit their own profile; role changes are an admin action.
    if caller.id != member_id && !roles::is_admin(&caller.roles()) {
        return Err(AppError::Forbidden("Cannot edit another member".into()));
    }
    if payload.roles.is_some() && !roles::is_admin(&caller.roles()) {
        return Err(AppError::Forbidden("Only admins may assign roles".into()));
    }

    let mut member = state
        .member_repo
        .find_by_id(&member_id)
        .await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    if let Some(name) = payload.name {
        member.name = name;
    }
    if let Some(grade) = payload.grade {
        member.grade = grade;
    }
    if let Some(part) = payload.part {
        member.part = part;
    }
    if let Some(group_name) = payload.group_name {
        member.group_name = Some(group_name);
    }
    if let Some(new_roles) = payload.roles {
        validate_roles(&new_roles)?;
        member.roles_json =
            serde_json::to_string(&new_roles).map_err(|_| AppError::Internal)?;
    }
    member.updated_at = Utc::now();

    let updated = state.member_repo.update(&member).await?;
    info!("Updated member: {}", updated.id);
    Ok(Json(MemberResponse::from(updated)))
}

pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    AuthMember(caller): AuthMember,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !roles::is_admin(&caller.roles()) {
        return Err(AppError::Forbidden("Only admins may delete members".into()));
    }
    if caller.id == member_id {
        return Err(AppError::Conflict("Cannot delete yourself".into()));
    }

    state
        .member_repo
        .find_by_id(&member_id)
        .await?
        .ok_or(AppError::NotFound("Member not found".into()))?;

    state.member_repo.delete(&member_id).await?;
    info!("Deleted member {}", member_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
