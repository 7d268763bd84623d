use axum::{
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
};
use crate::state::AppState;
use crate::domain::models::member::Member;
use std::sync::Arc;
use tracing::Span;

/// Identifies the calling member from the `X-Member-Id` header and loads
/// their record, roles included. The club app has no real credential
/// scheme; role checks downstream rely on the stored member record, never
/// on anything the client sends besides the id.
pub struct AuthMember(pub Member);

impl<S> FromRequestParts<S> for AuthMember
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let member_id = parts
            .headers
            .get("X-Member-Id")
            .ok_or(StatusCode::UNAUTHORIZED)?
            .to_str()
            .map_err(|_| StatusCode::UNAUTHORIZED)?
            .to_string();

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let member = app_state
            .member_repo
            .find_by_id(&member_id)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Span::current().record("member_id", &member.id);

        Ok(AuthMember(member))
    }
}
