//! Application state shared across route handlers.

use std::sync::Arc;
use std::time::Instant;

use roost_assist::Assistant;
use roost_core::config::RoostConfig;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks; nothing
/// here is mutable, so concurrent requests share no mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<RoostConfig>,
    /// The conversational assistant core.
    pub assistant: Arc<Assistant>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with the given components.
    pub fn new(config: RoostConfig, assistant: Assistant) -> Self {
        Self {
            config: Arc::new(config),
            assistant: Arc::new(assistant),
            start_time: Instant::now(),
        }
    }
}
