use serde::{Deserialize, Serialize};

// =============================================================================
// Chat
// =============================================================================

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single transcript entry. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    role: ChatRole,
    text: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, text)
    }

    pub fn role(&self) -> ChatRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

// =============================================================================
// Views
// =============================================================================

/// Which static view the presentation layer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewDescriptor {
    Overview,
    Reports,
    Surveys,
    AiSupport,
    NotFound,
}

impl ViewDescriptor {
    /// The routable views, in sidebar order.
    pub const NAVIGABLE: [ViewDescriptor; 4] = [
        ViewDescriptor::Overview,
        ViewDescriptor::Reports,
        ViewDescriptor::Surveys,
        ViewDescriptor::AiSupport,
    ];

    /// Canonical path for the view. `None` for [`ViewDescriptor::NotFound`].
    pub fn path(&self) -> Option<&'static str> {
        match self {
            ViewDescriptor::Overview => Some("/"),
            ViewDescriptor::Reports => Some("/reports"),
            ViewDescriptor::Surveys => Some("/surveys"),
            ViewDescriptor::AiSupport => Some("/ai"),
            ViewDescriptor::NotFound => None,
        }
    }

    /// Navigation label / page heading.
    pub fn title(&self) -> &'static str {
        match self {
            ViewDescriptor::Overview => "Overview",
            ViewDescriptor::Reports => "Reports",
            ViewDescriptor::Surveys => "Surveys",
            ViewDescriptor::AiSupport => "AI Support",
            ViewDescriptor::NotFound => "404 Page Not Found",
        }
    }
}

// =============================================================================
// Feedback
// =============================================================================

/// Which form a feedback request originates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackContext {
    Overview,
    Survey,
    Chat,
}

/// Input to [`crate::responder::KeywordResponder::classify`].
///
/// Each context carries the input kind its rule set inspects, so a survey can
/// only be classified by score and the text forms only by text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackRequest<'a> {
    /// Daily input text. `None` when the textarea was never filled in.
    Overview(Option<&'a str>),
    /// Slider value, nominally 0..=10. Not range checked.
    Survey(i32),
    /// A chat message.
    Chat(&'a str),
}

impl FeedbackRequest<'_> {
    pub fn context(&self) -> FeedbackContext {
        match self {
            FeedbackRequest::Overview(_) => FeedbackContext::Overview,
            FeedbackRequest::Survey(_) => FeedbackContext::Survey,
            FeedbackRequest::Chat(_) => FeedbackContext::Chat,
        }
    }
}

/// Canned response selected by keyword or threshold matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    StressDetected,
    HappyNoted,
    EntryRecorded,
    HighAnxiety,
    ModerateAnxiety,
    DoingWell,
    ChatStress,
    ChatHappy,
    ChatAcknowledged,
}

impl Feedback {
    /// The text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Feedback::StressDetected => "😟 Stress detected. Try some deep breaths.",
            Feedback::HappyNoted => "😊 Great to hear you're happy!",
            Feedback::EntryRecorded => "🧠 Entry recorded. Keep tracking!",
            Feedback::HighAnxiety => "⚠️ High anxiety. Consider relaxation techniques.",
            Feedback::ModerateAnxiety => "😐 Moderate anxiety. Stay aware.",
            Feedback::DoingWell => "😊 You're doing well.",
            Feedback::ChatStress => {
                "😟 I'm sorry you're feeling stressed. Try a breathing exercise."
            }
            Feedback::ChatHappy => "😊 That's wonderful to hear!",
            Feedback::ChatAcknowledged => "🤖 Thank you for sharing.",
        }
    }

    /// The form this feedback belongs to.
    pub fn context(&self) -> FeedbackContext {
        match self {
            Feedback::StressDetected | Feedback::HappyNoted | Feedback::EntryRecorded => {
                FeedbackContext::Overview
            }
            Feedback::HighAnxiety | Feedback::ModerateAnxiety | Feedback::DoingWell => {
                FeedbackContext::Survey
            }
            Feedback::ChatStress | Feedback::ChatHappy | Feedback::ChatAcknowledged => {
                FeedbackContext::Chat
            }
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_message_constructors() {
        let user = ChatMessage::user("hi");
        assert_eq!(user.role(), ChatRole::User);
        assert_eq!(user.text(), "hi");

        let assistant = ChatMessage::assistant("hello");
        assert_eq!(assistant.role(), ChatRole::Assistant);
    }

    #[test]
    fn test_chat_role_serializes_snake_case() {
        let json = serde_json::to_string(&ChatMessage::assistant("x")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","text":"x"}"#);
    }

    #[test]
    fn test_view_paths_and_titles() {
        assert_eq!(ViewDescriptor::Overview.path(), Some("/"));
        assert_eq!(ViewDescriptor::AiSupport.path(), Some("/ai"));
        assert_eq!(ViewDescriptor::NotFound.path(), None);
        assert_eq!(ViewDescriptor::AiSupport.title(), "AI Support");
        assert_eq!(ViewDescriptor::NotFound.title(), "404 Page Not Found");
    }

    #[test]
    fn test_view_descriptor_serializes_snake_case() {
        let json = serde_json::to_string(&ViewDescriptor::AiSupport).unwrap();
        assert_eq!(json, "\"ai_support\"");
    }

    #[test]
    fn test_feedback_request_context() {
        assert_eq!(FeedbackRequest::Overview(None).context(), FeedbackContext::Overview);
        assert_eq!(FeedbackRequest::Survey(3).context(), FeedbackContext::Survey);
        assert_eq!(FeedbackRequest::Chat("x").context(), FeedbackContext::Chat);
    }

    #[test]
    fn test_feedback_display_matches_message() {
        assert_eq!(Feedback::DoingWell.to_string(), "😊 You're doing well.");
        assert_eq!(Feedback::ChatStress.context(), FeedbackContext::Chat);
    }
}
