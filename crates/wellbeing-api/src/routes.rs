//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with tracing, compression, a body size limit
//! and all endpoint handlers.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::signal;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use wellbeing_core::{WellbeingConfig, WellbeingError};

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let session_routes = Router::new()
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/{id}",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/sessions/{id}/navigate", post(handlers::navigate))
        .route("/sessions/{id}/overview", post(handlers::overview_submit))
        .route("/sessions/{id}/survey", post(handlers::survey_submit))
        .route(
            "/sessions/{id}/chat",
            get(handlers::chat_transcript).post(handlers::chat_send),
        )
        .route("/sessions/{id}/page", get(handlers::page));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(session_routes)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM.
pub async fn start_server(config: &WellbeingConfig, state: AppState) -> Result<(), WellbeingError> {
    let addr = config.bind_addr();
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| WellbeingError::Api(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!(addr = %addr, "API server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WellbeingError::Api(format!("Server error: {}", e)))?;

    tracing::info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = signal_or_pending("ctrl_c", signal::ctrl_c());
    #[cfg(unix)]
    let terminate = signal_or_pending("sigterm", async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut stream = signal(SignalKind::terminate())?;
        stream
            .recv()
            .await
            .ok_or_else(|| std::io::Error::other("SIGTERM stream closed"))
    });
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

/// Resolve when `wait` delivers its signal. A handler that cannot be
/// installed never resolves, so it cannot trigger a shutdown.
async fn signal_or_pending<F>(name: &'static str, wait: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(e) = wait.await {
        tracing::warn!(signal = name, error = %e, "Signal handler unavailable");
        std::future::pending::<()>().await;
    }
}
