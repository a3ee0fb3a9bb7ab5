//! Static content behind each view descriptor.
//!
//! Everything here is fixed data: card texts, chart series and form labels.
//! Charts are described, not drawn.

use serde::Serialize;
use wellbeing_core::ViewDescriptor;

/// Slider bounds and default for the self check-in survey.
pub const SURVEY_MIN: i32 = 0;
pub const SURVEY_MAX: i32 = 10;
pub const SURVEY_STEP: i32 = 1;
pub const SURVEY_DEFAULT: i32 = 5;

/// A headed text card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub header: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Pie,
}

/// Chart data for an external plotting component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    /// Card header the chart sits under.
    pub header: &'static str,
    /// Title drawn by the chart itself.
    pub title: &'static str,
    pub kind: ChartKind,
    pub labels: Vec<&'static str>,
    pub values: Vec<u32>,
}

/// The input form a view carries, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Form {
    DailyInput {
        header: &'static str,
        placeholder: &'static str,
    },
    SelfCheckIn {
        header: &'static str,
        question: &'static str,
        min: i32,
        max: i32,
        step: i32,
        default: i32,
    },
    Chat {
        placeholder: &'static str,
    },
}

/// Static content of one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewContent {
    pub view: ViewDescriptor,
    pub title: &'static str,
    pub cards: Vec<Card>,
    pub charts: Vec<Chart>,
    pub form: Option<Form>,
}

impl ViewContent {
    /// Content for `view`.
    pub fn for_view(view: ViewDescriptor) -> Self {
        let mut content = ViewContent {
            view,
            title: view.title(),
            cards: Vec::new(),
            charts: Vec::new(),
            form: None,
        };

        match view {
            ViewDescriptor::Overview => {
                content.cards = vec![
                    Card {
                        header: "Stress Level",
                        body: "📈 Stress: Moderate",
                    },
                    Card {
                        header: "Mood Status",
                        body: "😊 Mood: 60% Positive",
                    },
                ];
                content.form = Some(Form::DailyInput {
                    header: "Daily Input",
                    placeholder: "Describe how you feel today...",
                });
            }
            ViewDescriptor::Reports => {
                content.charts = vec![
                    Chart {
                        header: "Monthly Report",
                        title: "Stress Over Time",
                        kind: ChartKind::Line,
                        labels: vec!["Jan", "Feb", "Mar", "Apr"],
                        values: vec![5, 6, 7, 8],
                    },
                    Chart {
                        header: "Mood Distribution",
                        title: "Mood Pie",
                        kind: ChartKind::Pie,
                        labels: vec!["Positive", "Neutral", "Negative"],
                        values: vec![60, 25, 15],
                    },
                ];
            }
            ViewDescriptor::Surveys => {
                content.form = Some(Form::SelfCheckIn {
                    header: "Self Check-in",
                    question: "Over the past week, how often have you felt anxious?",
                    min: SURVEY_MIN,
                    max: SURVEY_MAX,
                    step: SURVEY_STEP,
                    default: SURVEY_DEFAULT,
                });
            }
            ViewDescriptor::AiSupport => {
                content.form = Some(Form::Chat {
                    placeholder: "How are you feeling today?",
                });
            }
            ViewDescriptor::NotFound => {}
        }

        content
    }
}
