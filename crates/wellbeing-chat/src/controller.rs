//! Page controller: per-session coordinator for every user action.
//!
//! Holds two independent slices of state: the current route (changed only by
//! navigation) and the chat transcript (changed only by chat sends). One
//! controller serves one user session; callers that dispatch concurrently
//! must serialize access to it.

use serde::Serialize;
use wellbeing_core::{Feedback, FeedbackRequest, KeywordResponder, ViewDescriptor, ViewRouter};

use crate::session::{ChatSession, RenderedMessage};

/// Route the controller starts on.
pub const INITIAL_ROUTE: &str = "/";

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub route: String,
    pub view: ViewDescriptor,
    pub transcript: Vec<RenderedMessage>,
}

/// Session-scoped controller.
#[derive(Debug, Clone)]
pub struct PageController {
    responder: KeywordResponder,
    current_route: String,
    chat: ChatSession,
}

impl Default for PageController {
    fn default() -> Self {
        Self::new()
    }
}

impl PageController {
    pub fn new() -> Self {
        Self {
            responder: KeywordResponder::new(),
            current_route: INITIAL_ROUTE.to_string(),
            chat: ChatSession::new(),
        }
    }

    /// Record the new route and resolve it.
    pub fn on_navigate(&mut self, path: &str) -> ViewDescriptor {
        let view = ViewRouter::resolve(path);
        self.current_route = path.to_string();
        tracing::debug!(path, view = ?view, "Navigated");
        view
    }

    /// Feedback for the overview "Daily Input" form.
    pub fn on_overview_submit(&self, text: Option<&str>) -> Feedback {
        self.responder.classify(FeedbackRequest::Overview(text))
    }

    /// Feedback for the survey slider.
    pub fn on_survey_submit(&self, score: i32) -> Feedback {
        self.responder.classify(FeedbackRequest::Survey(score))
    }

    /// Send a chat message. Empty or whitespace-only text is a no-op.
    pub fn on_chat_send(&mut self, text: &str) -> &ChatSession {
        match self.chat.send(&self.responder, text) {
            Ok(_) => {}
            Err(e) => tracing::debug!(error = %e, "Chat send suppressed"),
        }
        &self.chat
    }

    pub fn current_route(&self) -> &str {
        &self.current_route
    }

    pub fn current_view(&self) -> ViewDescriptor {
        ViewRouter::resolve(&self.current_route)
    }

    pub fn chat_session(&self) -> &ChatSession {
        &self.chat
    }

    /// Renderable state for the active view.
    pub fn render(&self) -> PageState {
        PageState {
            route: self.current_route.clone(),
            view: self.current_view(),
            transcript: self.chat.render(),
        }
    }
}
