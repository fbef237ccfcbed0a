//! Shared application state for the Axum API server.

use std::sync::Arc;

use tiercast_engine::service::NotifyService;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub notify: Arc<NotifyService>,
}

impl AppState {
    pub fn new(notify: NotifyService) -> Self {
        Self {
            notify: Arc::new(notify),
        }
    }
}
