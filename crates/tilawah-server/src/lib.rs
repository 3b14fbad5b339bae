//! tilawah-server - HTTP service for the self-service results flow.
//!
//! A reciter looks up their evaluation by code, binds their name once if the
//! examiner did not record it, and reads or downloads their results.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;

use tilawah_core::EvaluationRepository;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Evaluation store
    pub repo: Arc<dyn EvaluationRepository>,
}

impl AppState {
    /// Create new application state
    pub fn new(repo: Arc<dyn EvaluationRepository>) -> Self {
        Self { repo }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let api = Router::new()
        .route("/api/catalogue", get(api::get_catalogue))
        .route("/api/lookup", post(api::lookup_code))
        .route("/api/evaluations/:id/profile", post(api::bind_profile))
        .route("/api/results/:id", get(api::get_results));

    let pages = Router::new()
        .route("/results/:id", get(api::results_page))
        .route("/results/:id/download", get(api::download_results));

    Router::new()
        .merge(api)
        .merge(pages)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .with_context(|| format!("invalid bind address: {addr}"))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("tilawah listening on http://{}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
