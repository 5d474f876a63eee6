//! Shared application state for the KWS server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`.

use std::sync::Arc;

use kws_core::auth::AdminGate;
use kws_core::store::AdminStore;

/// Shared application state passed to all HTTP handlers.
pub struct AppState {
    /// Catalog collections and the submissions log.
    pub store: Arc<AdminStore>,
    /// Admin password check and open sessions.
    pub gate: Arc<AdminGate>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<AdminStore>, gate: Arc<AdminGate>) -> Self {
        Self { store, gate }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
