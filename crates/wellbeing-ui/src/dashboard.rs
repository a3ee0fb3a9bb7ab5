//! HTML rendering of a session's page state.
//!
//! Produces a single self-contained document: sidebar navigation, the active
//! view's static content, and the chat transcript as aligned bubbles. Chart
//! series are emitted as `data-` attributes for an external plotting script.
//!
//! Every link and form on the page targets the owning session. `base` is the
//! session's URL prefix (`/sessions/{id}`); nav links reload the page with a
//! `path` query and the forms post JSON to the session's action endpoints.

use wellbeing_chat::{Alignment, PageState, RenderedMessage};
use wellbeing_core::ViewDescriptor;

use crate::content::{Chart, ChartKind, Form, ViewContent};

/// Document title.
pub const DASHBOARD_TITLE: &str = "La Trobe Emotion Dashboard";

/// Sidebar brand text.
pub const BRAND: &str = "LA TROBE";

/// Client glue for the three forms. Each submit button keeps its own click
/// count, which the server uses to tell "not yet submitted" apart.
const FORM_SCRIPT: &str = r#"    <script>
      const base = document.body.dataset.session;
      const clicks = { overview: 0, survey: 0 };
      async function post(action, body) {
        const resp = await fetch(`${base}/${action}`, {
          method: "POST",
          headers: { "content-type": "application/json" },
          body: JSON.stringify(body),
        });
        return resp.json();
      }
      function bind(id, handler) {
        const el = document.getElementById(id);
        if (el) el.addEventListener("click", handler);
      }
      bind("submit-button", async () => {
        clicks.overview += 1;
        const text = document.getElementById("input-text").value;
        const r = await post("overview", { text, submit_count: clicks.overview });
        document.getElementById("overview-feedback").textContent = r.feedback;
      });
      bind("survey-submit", async () => {
        clicks.survey += 1;
        const score = Number(document.getElementById("survey-slider").value);
        const r = await post("survey", { score, submit_count: clicks.survey });
        document.getElementById("survey-feedback").textContent = r.feedback;
      });
      bind("send-button", async () => {
        const input = document.getElementById("user-message");
        const r = await post("chat", { text: input.value });
        const bubbles = r.messages.map((m) => {
          const div = document.createElement("div");
          div.className = m.alignment === "right" ? "chat-bubble-right" : "chat-bubble-left";
          div.textContent = m.text;
          return div;
        });
        document.getElementById("chat-window").replaceChildren(...bubbles);
        input.value = "";
      });
    </script>"#;

/// Render the complete HTML document for `state`, with links and form
/// actions rooted at `base`.
pub fn render_page(state: &PageState, base: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
  </head>
  <body data-session="{base}">
    <nav class="sidebar" aria-label="Main">
      <h2>{brand}</h2>
      <hr />
{nav}
    </nav>
    <main id="page-content">
{content}
    </main>
{script}
  </body>
</html>"#,
        title = escape_html(DASHBOARD_TITLE),
        base = escape_html(base),
        brand = escape_html(BRAND),
        nav = render_nav(state.view, base),
        content = render_view(state.view, &state.transcript),
        script = FORM_SCRIPT,
    )
}

/// Href that navigates the session at `base` to `path` and shows the page.
pub fn nav_href(base: &str, path: &str) -> String {
    format!("{}/page?path={}", base, path)
}

/// Sidebar links; the link whose path exactly equals the active view's path
/// is marked active.
fn render_nav(active: ViewDescriptor, base: &str) -> String {
    ViewDescriptor::NAVIGABLE
        .iter()
        .filter_map(|view| view.path().map(|path| (view, path)))
        .map(|(view, path)| {
            let class = if *view == active {
                "nav-link active"
            } else {
                "nav-link"
            };
            format!(
                r#"      <a class="{}" href="{}">{}</a>"#,
                class,
                escape_html(&nav_href(base, path)),
                escape_html(view.title())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the body fragment for one view.
pub fn render_view(view: ViewDescriptor, transcript: &[RenderedMessage]) -> String {
    let content = ViewContent::for_view(view);
    if view == ViewDescriptor::NotFound {
        return format!("      <div>{}</div>", escape_html(content.title));
    }

    let mut out = Vec::new();
    out.push(format!("      <h2>{}</h2>", escape_html(content.title)));

    for card in &content.cards {
        out.push(format!(
            r#"      <div class="card"><div class="card-header">{}</div><div class="card-body">{}</div></div>"#,
            escape_html(card.header),
            escape_html(card.body)
        ));
    }

    for chart in &content.charts {
        out.push(render_chart(chart));
    }

    if let Some(form) = &content.form {
        out.push(render_form(form, transcript));
    }

    out.join("\n")
}

fn render_chart(chart: &Chart) -> String {
    let kind = match chart.kind {
        ChartKind::Line => "line",
        ChartKind::Pie => "pie",
    };
    let labels = serde_json::to_string(&chart.labels).unwrap_or_else(|_| "[]".to_string());
    let values = serde_json::to_string(&chart.values).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"      <div class="card"><div class="card-header">{}</div><div class="card-body"><div class="chart" data-kind="{}" data-title="{}" data-labels="{}" data-values="{}"></div></div></div>"#,
        escape_html(chart.header),
        kind,
        escape_html(chart.title),
        escape_html(&labels),
        escape_html(&values)
    )
}

fn render_form(form: &Form, transcript: &[RenderedMessage]) -> String {
    match form {
        Form::DailyInput {
            header,
            placeholder,
        } => format!(
            r#"      <div class="card"><div class="card-header">{}</div><div class="card-body"><textarea id="input-text" placeholder="{}"></textarea><button id="submit-button">Submit</button><div id="overview-feedback"></div></div></div>"#,
            escape_html(header),
            escape_html(placeholder)
        ),
        Form::SelfCheckIn {
            header,
            question,
            min,
            max,
            step,
            default,
        } => format!(
            r#"      <div class="card"><div class="card-header">{}</div><div class="card-body"><p>{}</p><input id="survey-slider" type="range" min="{}" max="{}" step="{}" value="{}" /><button id="survey-submit">Submit</button><div id="survey-feedback"></div></div></div>"#,
            escape_html(header),
            escape_html(question),
            min,
            max,
            step,
            default
        ),
        Form::Chat { placeholder } => format!(
            r#"      <div class="card"><div class="card-body"><div id="chat-window">
{}
      </div><input id="user-message" placeholder="{}" /><button id="send-button">Send</button></div></div>"#,
            render_transcript(transcript),
            escape_html(placeholder)
        ),
    }
}

/// One `div` per message, class chosen by alignment.
pub fn render_transcript(transcript: &[RenderedMessage]) -> String {
    transcript
        .iter()
        .map(|m| {
            let class = match m.alignment {
                Alignment::Right => "chat-bubble-right",
                Alignment::Left => "chat-bubble-left",
            };
            format!(r#"        <div class="{}">{}</div>"#, class, escape_html(&m.text))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
