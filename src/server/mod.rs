//! HTTP API exposing the translate and daily-quote endpoints.
//!
//! Routing is deliberately small: two paths, JSON in and out. Requests with
//! an unsupported method on a known path get the router's own 405.

mod handlers;

pub use handlers::{TranslateRequest, TranslateResponse};

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

use crate::quotes::DailyQuoteService;
use crate::translation::GeminiClient;

/// Shared state behind the handlers.
///
/// `translator` is the primary provider only: the HTTP surface proxies it
/// verbatim (including 429) instead of walking the fallback chain.
pub struct AppState {
    pub translator: Option<GeminiClient>,
    pub daily: DailyQuoteService,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/translate", post(handlers::translate))
        .route("/api/daily", get(handlers::daily).post(handlers::daily))
        .with_state(state)
}

/// Binds and serves until the process is stopped.
pub async fn run(state: AppState, host: &str, port: u16) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, "serving quote API");

    axum::serve(listener, router(state.into()))
        .await
        .context("Server error")?;

    Ok(())
}
