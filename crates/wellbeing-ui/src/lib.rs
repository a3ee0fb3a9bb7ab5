//! Presentation glue for the wellbeing dashboard.
//!
//! - [`content`]: fixed card, chart and form data for each view
//! - [`dashboard`]: HTML rendering of a [`wellbeing_chat::PageState`]
//!
//! Styling and chart drawing are left to the browser side.

pub mod content;
pub mod dashboard;

pub use content::{Card, Chart, ChartKind, Form, ViewContent, SURVEY_DEFAULT};
pub use dashboard::{nav_href, render_page, render_transcript, render_view};
