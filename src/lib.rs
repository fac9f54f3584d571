//! Visitor Log Server
//!
//! A Rust implementation of the visitor check-in system: a public
//! check-in form API backed by a hosted record store, and an
//! authenticated dashboard that filters, sorts, paginates and exports
//! the visitor logs.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
