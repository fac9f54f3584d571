//! Visitor Log Server - check-in form API and visitor-logs dashboard

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use visitlog_server::{
    api,
    config::AppConfig,
    services::Services,
    store::{RecordStore, RestStore},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration. The record store URL and API key are
    // required; a missing value fails here instead of per request.
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("visitlog_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Visitor Log Server v{}", env!("CARGO_PKG_VERSION"));

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create the record store client and services
    let store: Arc<dyn RecordStore> =
        Arc::new(RestStore::new(&config.store.url, &config.store.api_key));
    let services = Arc::new(Services::new(store));

    tracing::info!("Record store client ready for {}", config.store.url);

    // When the admin session ends, drop the cached record snapshot.
    // The subscription lives as long as this task.
    {
        let services = services.clone();
        let mut sessions = services.sessions.subscribe();
        let watcher = services.clone();
        tokio::spawn(async move {
            while sessions.changed().await.is_ok() {
                let signed_out = sessions.borrow_and_update().is_none();
                if signed_out {
                    watcher.dashboard.clear().await;
                    tracing::debug!("session ended, dashboard snapshot cleared");
                }
            }
        });
    }

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/logout", post(api::auth::logout))
        .route("/auth/session", get(api::auth::session))
        // Public check-in form
        .route("/visitors", post(api::visitors::check_in))
        .route("/form/colleges", get(api::visitors::form_colleges))
        // Dashboard
        .route("/visitor-logs", get(api::logs::list_logs))
        .route("/visitor-logs/colleges", get(api::logs::list_colleges))
        .route("/visitor-logs/export", get(api::logs::export_logs))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
