//! Error types for the chat transcript.

use wellbeing_core::error::WellbeingError;

/// Errors from [`crate::session::ChatSession`].
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The message was empty or whitespace only. Callers are expected to
    /// suppress the send instead of surfacing this.
    #[error("message cannot be empty")]
    InvalidInput,
}

/// For library callers that drive [`crate::session::ChatSession::send`]
/// directly and propagate with `?`. [`crate::PageController::on_chat_send`]
/// never surfaces this error.
impl From<ChatError> for WellbeingError {
    fn from(err: ChatError) -> Self {
        WellbeingError::Chat(err.to_string())
    }
}
