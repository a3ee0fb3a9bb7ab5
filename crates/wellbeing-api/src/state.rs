//! Application state shared across all route handlers.
//!
//! AppState is passed to handlers via axum's State extractor. It holds no
//! user data itself; per-user state lives in the session registry.

use std::sync::Arc;
use std::time::Instant;

use wellbeing_core::WellbeingConfig;

use crate::sessions::SessionRegistry;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<WellbeingConfig>,
    /// Live sessions, each with its own page controller.
    pub sessions: Arc<SessionRegistry>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: WellbeingConfig) -> Self {
        let sessions = SessionRegistry::new(
            config.sessions.max_sessions,
            config.sessions.idle_timeout_minutes,
        );
        Self {
            config: Arc::new(config),
            sessions: Arc::new(sessions),
            start_time: Instant::now(),
        }
    }
}
