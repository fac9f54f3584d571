//! Public check-in form endpoints
//!
//! These routes are unauthenticated: anyone reaching the kiosk form
//! can submit a check-in.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::NewVisitor};

#[derive(Serialize, ToSchema)]
pub struct CheckInResponse {
    pub message: String,
}

/// Record a visitor check-in
#[utoipa::path(
    post,
    path = "/visitors",
    tag = "visitors",
    request_body = NewVisitor,
    responses(
        (status = 201, description = "Visitor logged", body = CheckInResponse),
        (status = 400, description = "Invalid submission"),
        (status = 502, description = "Record store unavailable")
    )
)]
pub async fn check_in(
    State(state): State<crate::AppState>,
    Json(visitor): Json<NewVisitor>,
) -> AppResult<(StatusCode, Json<CheckInResponse>)> {
    state.services.visitors.check_in(visitor).await?;
    Ok((
        StatusCode::CREATED,
        Json(CheckInResponse {
            message: "Visitor logged successfully".to_string(),
        }),
    ))
}

/// College picklist offered on the check-in form
#[utoipa::path(
    get,
    path = "/form/colleges",
    tag = "visitors",
    responses(
        (status = 200, description = "Configured college picklist", body = Vec<String>)
    )
)]
pub async fn form_colleges(State(state): State<crate::AppState>) -> Json<Vec<String>> {
    Json(state.config.form.colleges.clone())
}
