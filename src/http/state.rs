//! Application state for the HTTP server.
//!
//! The state holds only configuration fixed at startup; each request owns
//! its own pool and event lists, so there is no shared mutable state
//! across requests.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::TimeFormatter;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Time formatter built once from configuration
    pub formatter: Arc<TimeFormatter>,
}

impl AppState {
    /// Create a new application state with the given formatter.
    pub fn new(formatter: TimeFormatter) -> Self {
        Self {
            formatter: Arc::new(formatter),
        }
    }

    /// Build application state from configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(TimeFormatter::new(config.time_format_pattern.clone()))
    }
}
