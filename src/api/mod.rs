//! API handlers for the visitor log REST endpoints

pub mod auth;
pub mod health;
pub mod logs;
pub mod openapi;
pub mod visitors;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{error::AppError, models::Session, AppState};

/// Extractor for the authenticated admin session on dashboard routes
pub struct AuthenticatedSession(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication(
                "Invalid authorization header format".to_string(),
            ));
        }

        let token = &auth_header[7..];

        // Validate against the session the server currently holds
        let session = state.services.sessions.authenticate(token)?;

        Ok(AuthenticatedSession(session))
    }
}
