//! Route handler functions for all API endpoints.
//!
//! Each handler resolves the session from the path, runs one controller
//! action under that session's lock, and returns JSON (or HTML for `/page`).
//! JSON bodies are taken as `Result<Json<_>, JsonRejection>` so malformed
//! input gets the same error body as every other failure.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wellbeing_chat::{PageState, RenderedMessage};
use wellbeing_core::{Feedback, ViewDescriptor};
use wellbeing_ui::{ViewContent, SURVEY_DEFAULT};

use crate::error::ApiError;
use crate::sessions::SessionHandle;
use crate::state::AppState;

// =============================================================================
// Request types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub path: String,
}

/// Body for the overview form. `submit_count` mirrors the button's click
/// counter; zero means the form has not been submitted yet.
#[derive(Debug, Deserialize)]
pub struct OverviewRequest {
    pub text: Option<String>,
    #[serde(default)]
    pub submit_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct SurveyRequest {
    pub score: Option<i32>,
    #[serde(default)]
    pub submit_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub text: Option<String>,
}

/// Query for the HTML page. When `path` is present the session navigates
/// there before rendering, which is what the sidebar links use.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub path: Option<String>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub active_sessions: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionCreated {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub route: String,
    pub view: ViewDescriptor,
    pub content: ViewContent,
}

/// Feedback text for a form. Empty, with no `kind`, before the first submit.
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub feedback: String,
    pub kind: Option<Feedback>,
}

impl FeedbackResponse {
    fn gated(submit_count: u32, classify: impl FnOnce() -> Feedback) -> Self {
        if submit_count == 0 {
            return Self {
                feedback: String::new(),
                kind: None,
            };
        }
        let kind = classify();
        Self {
            feedback: kind.message().to_string(),
            kind: Some(kind),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub len: usize,
    pub messages: Vec<RenderedMessage>,
}

// =============================================================================
// Helpers
// =============================================================================

fn find_session(state: &AppState, id: Uuid) -> Result<Arc<SessionHandle>, ApiError> {
    state
        .sessions
        .get(&id)?
        .ok_or_else(|| ApiError::NotFound(format!("Session '{}' not found", id)))
}

// =============================================================================
// Handler functions
// =============================================================================

/// GET /health - health check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        active_sessions: state.sessions.len() as u64,
    })
}

/// POST /sessions - start a session.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionCreated>), ApiError> {
    let handle = state.sessions.create()?;
    Ok((
        StatusCode::CREATED,
        Json(SessionCreated {
            session_id: handle.id,
            created_at: handle.created_at,
        }),
    ))
}

/// DELETE /sessions/{id} - end a session and drop its transcript.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.remove(&id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("Session '{}' not found", id)))
    }
}

/// GET /sessions/{id} - current page state.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PageState>, ApiError> {
    let session = find_session(&state, id)?;
    let page = session.with_controller(|c| c.render())?;
    Ok(Json(page))
}

/// POST /sessions/{id}/navigate - change route.
pub async fn navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<NavigateRequest>, JsonRejection>,
) -> Result<Json<NavigateResponse>, ApiError> {
    let Json(body) = payload?;
    let session = find_session(&state, id)?;
    let view = session.with_controller(|c| c.on_navigate(&body.path))?;
    tracing::debug!(session_id = %id, path = %body.path, view = ?view, "Navigate");

    Ok(Json(NavigateResponse {
        route: body.path,
        view,
        content: ViewContent::for_view(view),
    }))
}

/// POST /sessions/{id}/overview - daily input feedback.
pub async fn overview_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<OverviewRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let Json(body) = payload?;
    let session = find_session(&state, id)?;
    let response = session.with_controller(|c| {
        FeedbackResponse::gated(body.submit_count, || {
            c.on_overview_submit(body.text.as_deref())
        })
    })?;
    Ok(Json(response))
}

/// POST /sessions/{id}/survey - self check-in feedback.
pub async fn survey_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<SurveyRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let Json(body) = payload?;
    let session = find_session(&state, id)?;
    let score = body.score.unwrap_or(SURVEY_DEFAULT);
    let response = session.with_controller(|c| {
        FeedbackResponse::gated(body.submit_count, || c.on_survey_submit(score))
    })?;
    Ok(Json(response))
}

/// POST /sessions/{id}/chat - send a chat message. Empty text leaves the
/// transcript unchanged.
pub async fn chat_send(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let Json(body) = payload?;
    let session = find_session(&state, id)?;
    let text = body.text.unwrap_or_default();
    let messages = session.with_controller(|c| c.on_chat_send(&text).render())?;
    Ok(Json(TranscriptResponse {
        len: messages.len(),
        messages,
    }))
}

/// GET /sessions/{id}/chat - rendered transcript.
pub async fn chat_transcript(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let session = find_session(&state, id)?;
    let messages = session.with_controller(|c| c.chat_session().render())?;
    Ok(Json(TranscriptResponse {
        len: messages.len(),
        messages,
    }))
}

/// GET /sessions/{id}/page - HTML page for the current route, or for
/// `?path=` after navigating there.
pub async fn page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let session = find_session(&state, id)?;
    let page = session.with_controller(|c| {
        if let Some(path) = params.path.as_deref() {
            c.on_navigate(path);
        }
        c.render()
    })?;
    let base = format!("/sessions/{}", id);
    Ok(Html(wellbeing_ui::render_page(&page, &base)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;
    use wellbeing_core::WellbeingConfig;

    fn make_app() -> (AppState, axum::Router) {
        let state = AppState::new(WellbeingConfig::default());
        let app = crate::create_router(state.clone());
        (state, app)
    }

    async fn json_body(resp: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_json(uri: &str, json: &str) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    #[test]
    fn test_feedback_gated_before_first_submit() {
        let resp = FeedbackResponse::gated(0, || panic!("must not classify"));
        assert_eq!(resp.feedback, "");
        assert!(resp.kind.is_none());

        let resp = FeedbackResponse::gated(1, || Feedback::EntryRecorded);
        assert_eq!(resp.feedback, "🧠 Entry recorded. Keep tracking!");
        assert_eq!(resp.kind, Some(Feedback::EntryRecorded));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (_, app) = make_app();
        let resp = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.active_sessions, 0);
    }

    #[tokio::test]
    async fn test_create_session_returns_created() {
        let (state, app) = make_app();
        let resp = app
            .oneshot(Request::post("/sessions").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let created: SessionCreated = serde_json::from_slice(&body).unwrap();
        assert!(state.sessions.get(&created.session_id).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let (_, app) = make_app();
        let uri = format!("/sessions/{}/chat", Uuid::new_v4());
        let resp = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = json_body(resp).await;
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_overview_without_submit_is_empty() {
        let (state, app) = make_app();
        let id = state.sessions.create().unwrap().id;
        let resp = app
            .oneshot(post_json(
                &format!("/sessions/{}/overview", id),
                r#"{"text":"so stressed"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["feedback"], "");
        assert!(body["kind"].is_null());
    }

    #[tokio::test]
    async fn test_survey_defaults_to_slider_default() {
        let (state, app) = make_app();
        let id = state.sessions.create().unwrap().id;
        let resp = app
            .oneshot(post_json(
                &format!("/sessions/{}/survey", id),
                r#"{"submit_count":1}"#,
            ))
            .await
            .unwrap();

        let body = json_body(resp).await;
        assert_eq!(body["kind"], "moderate_anxiety");
        assert_eq!(body["feedback"], "😐 Moderate anxiety. Stay aware.");
    }

    #[tokio::test]
    async fn test_chat_send_without_text_is_noop() {
        let (state, app) = make_app();
        let id = state.sessions.create().unwrap().id;
        let resp = app
            .oneshot(post_json(&format!("/sessions/{}/chat", id), "{}"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(body["len"], 1);
    }

    #[tokio::test]
    async fn test_page_query_navigates_before_render() {
        let (state, app) = make_app();
        let id = state.sessions.create().unwrap().id;
        let resp = app
            .oneshot(
                Request::get(format!("/sessions/{}/page?path=/surveys", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let route = state
            .sessions
            .get(&id)
            .unwrap()
            .unwrap()
            .with_controller(|c| c.current_route().to_string())
            .unwrap();
        assert_eq!(route, "/surveys");
    }

    #[tokio::test]
    async fn test_malformed_body_uses_error_shape() {
        let (state, app) = make_app();
        let id = state.sessions.create().unwrap().id;
        let resp = app
            .oneshot(post_json(&format!("/sessions/{}/survey", id), r#"{"score":"high"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = json_body(resp).await;
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_invalid_session_id_is_rejected() {
        let (_, app) = make_app();
        let resp = app
            .oneshot(Request::get("/sessions/not-a-uuid").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
