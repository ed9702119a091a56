use anyhow::Result;

use super::build_services;
use crate::config::{ResolveOptions, load_resolved};
use crate::session::QuoteSession;

pub struct SessionOptions {
    pub model: Option<String>,
}

pub async fn run_session(options: SessionOptions) -> Result<()> {
    let config = load_resolved(&ResolveOptions {
        model: options.model,
    });
    let services = build_services(&config)?;

    let mut session = QuoteSession::new(config, services.advice, services.resolver, services.daily);
    session.run().await
}
