//! Admin session types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login request for the dashboard
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// An authenticated admin session issued by the hosted auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Session {
    /// Bearer token presented on dashboard requests
    pub access_token: String,
    pub token_type: String,
    /// Email of the signed-in administrator
    pub email: String,
}
