//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, health, logs, visitors};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Visitor Log API",
        version = "0.3.0",
        description = "Visitor check-in form and visitor-logs dashboard REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::logout,
        auth::session,
        // Check-in form
        visitors::check_in,
        visitors::form_colleges,
        // Dashboard
        logs::list_logs,
        logs::list_colleges,
        logs::export_logs,
    ),
    components(
        schemas(
            // Auth
            crate::models::session::Credentials,
            crate::models::session::Session,
            // Check-in form
            crate::models::visitor::NewVisitor,
            visitors::CheckInResponse,
            // Dashboard
            crate::models::visitor::VisitorRecord,
            logs::VisitorRow,
            logs::VisitorLogsResponse,
            crate::engine::SortKey,
            crate::engine::Direction,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Admin authentication"),
        (name = "visitors", description = "Public check-in form"),
        (name = "visitor_logs", description = "Visitor logs dashboard")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
