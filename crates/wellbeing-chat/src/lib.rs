//! Chat transcript and the per-session page controller.
//!
//! [`ChatSession`] owns the append-only transcript; [`PageController`] wires
//! navigation, form feedback and chat sends for one user session.

pub mod controller;
pub mod error;
pub mod session;

pub use controller::{PageController, PageState, INITIAL_ROUTE};
pub use error::ChatError;
pub use session::{Alignment, ChatSession, RenderedMessage, GREETING};
