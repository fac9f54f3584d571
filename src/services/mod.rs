//! Business logic services

pub mod dashboard;
pub mod sessions;
pub mod visitors;

use std::sync::Arc;

use crate::store::RecordStore;

/// Container for all services
pub struct Services {
    pub sessions: sessions::SessionService,
    pub dashboard: dashboard::DashboardService,
    pub visitors: visitors::VisitorsService,
}

impl Services {
    /// Create all services over the given record store client
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            sessions: sessions::SessionService::new(store.clone()),
            dashboard: dashboard::DashboardService::new(store.clone()),
            visitors: visitors::VisitorsService::new(store),
        }
    }
}
