use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use super::{daily_generator, gemini_client};
use crate::cache::DailyCache;
use crate::config::{ResolveOptions, load_resolved};
use crate::quotes::DailyQuoteService;
use crate::server::{self, AppState};
use crate::translation::http_client;

pub struct ServeOptions {
    pub host: String,
    pub port: u16,
    pub model: Option<String>,
}

/// Runs the HTTP API until interrupted.
pub async fn run_serve(options: ServeOptions) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_resolved(&ResolveOptions {
        model: options.model,
    });

    if config.api_key.is_none() {
        tracing::warn!("no API key configured; /api/translate and /api/daily will answer 500");
    }

    let http = http_client().context("Failed to build HTTP client")?;
    let state = AppState {
        translator: gemini_client(&http, &config),
        daily: DailyQuoteService::new(DailyCache::new()?, daily_generator(&http, &config)),
    };

    server::run(state, &options.host, options.port).await
}
