//! Authentication endpoints
//!
//! Sign-in and sign-out delegate to the hosted auth service; the
//! server only holds the resulting session and gates dashboard routes
//! on it. No lockout or backoff policy.

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::{Credentials, Session},
};

use super::AuthenticatedSession;

/// Sign in as the dashboard administrator
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = Credentials,
    responses(
        (status = 200, description = "Signed in", body = Session),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(credentials): Json<Credentials>,
) -> AppResult<Json<Session>> {
    let session = state
        .services
        .sessions
        .sign_in(&credentials.email, &credentials.password)
        .await?;
    Ok(Json(session))
}

/// Sign out and revoke the current session
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Signed out")
    )
)]
pub async fn logout(
    State(state): State<crate::AppState>,
    AuthenticatedSession(_session): AuthenticatedSession,
) -> AppResult<StatusCode> {
    state.services.sessions.sign_out().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Current session details
#[utoipa::path(
    get,
    path = "/auth/session",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Active session", body = Session),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn session(
    AuthenticatedSession(session): AuthenticatedSession,
) -> Json<Session> {
    Json(session)
}
