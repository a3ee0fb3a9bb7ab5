//! Append-only chat transcript.
//!
//! A session starts with one assistant greeting and only ever grows by a
//! (user, assistant) pair per accepted send. Entries are never edited,
//! reordered or removed.

use serde::Serialize;
use wellbeing_core::{ChatMessage, ChatRole, Feedback, FeedbackRequest, KeywordResponder};

use crate::error::ChatError;

/// Seeded assistant message every session starts with.
pub const GREETING: &str = "🧠 Hello! I'm here to support you. How are you feeling today?";

/// Horizontal placement of a rendered bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Right,
}

impl Alignment {
    fn for_role(role: ChatRole) -> Self {
        match role {
            ChatRole::User => Alignment::Right,
            ChatRole::Assistant => Alignment::Left,
        }
    }
}

/// One bubble of rendered transcript output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMessage {
    pub text: String,
    pub alignment: Alignment,
}

/// Ordered transcript owned by exactly one writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Create a session holding only the greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
        }
    }

    /// Append the user's message and the scripted reply.
    ///
    /// Rejects empty or whitespace-only text with [`ChatError::InvalidInput`]
    /// and leaves the transcript untouched. The user text is stored verbatim.
    pub fn send(
        &mut self,
        responder: &KeywordResponder,
        user_text: &str,
    ) -> Result<Feedback, ChatError> {
        if user_text.trim().is_empty() {
            return Err(ChatError::InvalidInput);
        }

        let reply = responder.classify(FeedbackRequest::Chat(user_text));

        // Both pushes land in reserved capacity, so the pair cannot be split.
        self.messages.reserve(2);
        self.messages.push(ChatMessage::user(user_text));
        self.messages.push(ChatMessage::assistant(reply.message()));

        tracing::debug!(len = self.messages.len(), reply = ?reply, "Chat message appended");
        Ok(reply)
    }

    /// Fresh render of the current transcript, user bubbles on the right.
    pub fn render(&self) -> Vec<RenderedMessage> {
        self.messages
            .iter()
            .map(|m| RenderedMessage {
                text: m.text().to_string(),
                alignment: Alignment::for_role(m.role()),
            })
            .collect()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: the greeting is never removed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
