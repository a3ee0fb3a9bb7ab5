//! HTTP boundary for the wellbeing dashboard.
//!
//! Exposes navigation, form feedback and chat actions per session, plus a
//! server-rendered HTML page and a health check.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod sessions;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
