//! Keyword and threshold matching for form feedback.
//!
//! Text forms lowercase the input and test an ordered keyword list; the first
//! keyword contained in the input wins. The survey form compares its score
//! against fixed thresholds instead.

use crate::types::{Feedback, FeedbackRequest};

/// Survey scores at or above this are high anxiety.
pub const HIGH_ANXIETY_THRESHOLD: i32 = 7;
/// Survey scores at or above this (and below high) are moderate anxiety.
pub const MODERATE_ANXIETY_THRESHOLD: i32 = 4;

/// A keyword tested by substring containment against lowercased input.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keyword: &'static str,
    pub feedback: Feedback,
}

/// Ordered rules for one text form plus the fallback when nothing matches.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<KeywordRule>,
    fallback: Feedback,
}

impl RuleSet {
    pub fn new(rules: Vec<KeywordRule>, fallback: Feedback) -> Self {
        Self { rules, fallback }
    }

    /// First matching rule in priority order, or the fallback.
    pub fn matches(&self, text: &str) -> Feedback {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| lowered.contains(rule.keyword))
            .map(|rule| rule.feedback)
            .unwrap_or(self.fallback)
    }
}

/// Maps form input to canned feedback. Pure; holds only the rule tables.
#[derive(Debug, Clone)]
pub struct KeywordResponder {
    overview: RuleSet,
    chat: RuleSet,
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordResponder {
    /// Build the responder with the fixed rule tables. `stress` is tested
    /// before `happy` in both text forms.
    pub fn new() -> Self {
        let overview = RuleSet::new(
            vec![
                KeywordRule {
                    keyword: "stress",
                    feedback: Feedback::StressDetected,
                },
                KeywordRule {
                    keyword: "happy",
                    feedback: Feedback::HappyNoted,
                },
            ],
            Feedback::EntryRecorded,
        );
        let chat = RuleSet::new(
            vec![
                KeywordRule {
                    keyword: "stress",
                    feedback: Feedback::ChatStress,
                },
                KeywordRule {
                    keyword: "happy",
                    feedback: Feedback::ChatHappy,
                },
            ],
            Feedback::ChatAcknowledged,
        );
        Self { overview, chat }
    }

    /// Classify a single form submission.
    ///
    /// A missing or empty overview entry still counts as a submission and
    /// yields [`Feedback::EntryRecorded`]; suppressing output before the first
    /// submit is the caller's job.
    pub fn classify(&self, request: FeedbackRequest<'_>) -> Feedback {
        match request {
            FeedbackRequest::Overview(text) => self.overview.matches(text.unwrap_or_default()),
            FeedbackRequest::Survey(score) => classify_score(score),
            FeedbackRequest::Chat(text) => self.chat.matches(text),
        }
    }
}

fn classify_score(score: i32) -> Feedback {
    if score >= HIGH_ANXIETY_THRESHOLD {
        Feedback::HighAnxiety
    } else if score >= MODERATE_ANXIETY_THRESHOLD {
        Feedback::ModerateAnxiety
    } else {
        Feedback::DoingWell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overview(text: &str) -> Feedback {
        KeywordResponder::new().classify(FeedbackRequest::Overview(Some(text)))
    }

    fn survey(score: i32) -> Feedback {
        KeywordResponder::new().classify(FeedbackRequest::Survey(score))
    }

    fn chat(text: &str) -> Feedback {
        KeywordResponder::new().classify(FeedbackRequest::Chat(text))
    }

    // =====================================================================
    // Overview
    // =====================================================================

    #[test]
    fn test_overview_stress() {
        assert_eq!(overview("I feel stressed today"), Feedback::StressDetected);
    }

    #[test]
    fn test_overview_happy() {
        assert_eq!(overview("I am happy"), Feedback::HappyNoted);
    }

    #[test]
    fn test_overview_fallback() {
        assert_eq!(overview("just tired"), Feedback::EntryRecorded);
        assert_eq!(
            Feedback::EntryRecorded.message(),
            "🧠 Entry recorded. Keep tracking!"
        );
    }

    #[test]
    fn test_overview_is_case_insensitive() {
        assert_eq!(overview("STRESS everywhere"), Feedback::StressDetected);
        assert_eq!(overview("So HaPpY"), Feedback::HappyNoted);
    }

    #[test]
    fn test_overview_stress_wins_over_happy() {
        assert_eq!(overview("happy but stressed"), Feedback::StressDetected);
        assert_eq!(overview("stressed but happy"), Feedback::StressDetected);
    }

    #[test]
    fn test_overview_substring_inside_word() {
        assert_eq!(overview("unhappy"), Feedback::HappyNoted);
        assert_eq!(overview("distressing"), Feedback::StressDetected);
    }

    #[test]
    fn test_overview_no_fuzzy_matching() {
        assert_eq!(overview("str ess"), Feedback::EntryRecorded);
        assert_eq!(overview("hapy"), Feedback::EntryRecorded);
    }

    #[test]
    fn test_overview_missing_or_empty_text_is_recorded() {
        let responder = KeywordResponder::new();
        assert_eq!(
            responder.classify(FeedbackRequest::Overview(None)),
            Feedback::EntryRecorded
        );
        assert_eq!(overview(""), Feedback::EntryRecorded);
    }

    // =====================================================================
    // Survey
    // =====================================================================

    #[test]
    fn test_survey_bands() {
        assert_eq!(survey(8), Feedback::HighAnxiety);
        assert_eq!(survey(5), Feedback::ModerateAnxiety);
        assert_eq!(survey(2), Feedback::DoingWell);
    }

    #[test]
    fn test_survey_boundaries() {
        assert_eq!(survey(7), Feedback::HighAnxiety);
        assert_eq!(survey(6), Feedback::ModerateAnxiety);
        assert_eq!(survey(4), Feedback::ModerateAnxiety);
        assert_eq!(survey(3), Feedback::DoingWell);
        assert_eq!(survey(0), Feedback::DoingWell);
        assert_eq!(survey(10), Feedback::HighAnxiety);
    }

    #[test]
    fn test_survey_out_of_range_is_not_validated() {
        assert_eq!(survey(-5), Feedback::DoingWell);
        assert_eq!(survey(42), Feedback::HighAnxiety);
    }

    // =====================================================================
    // Chat
    // =====================================================================

    #[test]
    fn test_chat_replies() {
        assert_eq!(chat("I'm stressed"), Feedback::ChatStress);
        assert_eq!(chat("I'm happy"), Feedback::ChatHappy);
        assert_eq!(chat("hello"), Feedback::ChatAcknowledged);
        assert_eq!(chat("Happy yet STRESSED"), Feedback::ChatStress);
    }

    #[test]
    fn test_every_result_belongs_to_request_context() {
        let responder = KeywordResponder::new();
        let requests = [
            FeedbackRequest::Overview(Some("stress")),
            FeedbackRequest::Overview(Some("happy")),
            FeedbackRequest::Overview(None),
            FeedbackRequest::Survey(9),
            FeedbackRequest::Survey(5),
            FeedbackRequest::Survey(1),
            FeedbackRequest::Chat("stress"),
            FeedbackRequest::Chat("happy"),
            FeedbackRequest::Chat("meh"),
        ];
        for request in requests {
            assert_eq!(responder.classify(request).context(), request.context());
        }
    }
}
