//! Application state for the HTTP server.

use std::sync::Arc;

use crate::ephemeris::Ephemeris;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Ephemeris backend used for all chart computations.
    pub ephemeris: Arc<dyn Ephemeris>,
}

impl AppState {
    /// Create a new application state with the given ephemeris backend.
    pub fn new(ephemeris: Arc<dyn Ephemeris>) -> Self {
        Self { ephemeris }
    }
}
