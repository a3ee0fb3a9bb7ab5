//! Core types and pure logic for the wellbeing dashboard.
//!
//! - [`router`]: exact-match path to view resolution
//! - [`responder`]: keyword/threshold feedback for the dashboard forms
//! - [`config`]: TOML configuration
//! - [`error`]: top-level error type

pub mod config;
pub mod error;
pub mod responder;
pub mod router;
pub mod types;

pub use config::WellbeingConfig;
pub use error::{Result, WellbeingError};
pub use responder::KeywordResponder;
pub use router::ViewRouter;
pub use types::*;
