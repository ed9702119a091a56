pub mod configure;
pub mod serve;
pub mod session;
pub mod show;
pub mod translate;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::cache::DailyCache;
use crate::config::ResolvedConfig;
use crate::quotes::daily::DailyGenerator;
use crate::quotes::{AdviceClient, DailyQuoteService};
use crate::translation::{
    GeminiClient, MyMemoryClient, TranslationProvider, TranslationResolver, http_client,
};

/// Everything a quote-displaying command needs, wired from resolved config.
pub(crate) struct Services {
    pub advice: AdviceClient,
    pub resolver: TranslationResolver,
    pub daily: DailyQuoteService,
}

pub(crate) fn build_services(config: &ResolvedConfig) -> Result<Services> {
    let http = http_client().context("Failed to build HTTP client")?;

    Ok(Services {
        advice: AdviceClient::new(http.clone(), config.advice_endpoint.clone()),
        resolver: build_resolver(&http, config),
        daily: DailyQuoteService::new(DailyCache::new()?, daily_generator(&http, config)),
    })
}

/// The resolver chain: the generative provider when a key is configured,
/// always backed by the free lookup service.
pub(crate) fn build_resolver(http: &Client, config: &ResolvedConfig) -> TranslationResolver {
    let primary =
        gemini_client(http, config).map(|client| Box::new(client) as Box<dyn TranslationProvider>);
    let fallback = Box::new(MyMemoryClient::new(
        http.clone(),
        config.mymemory_endpoint.clone(),
    ));

    TranslationResolver::new(primary, fallback)
}

/// `None` without an API key: the caller degrades instead of failing.
pub(crate) fn gemini_client(http: &Client, config: &ResolvedConfig) -> Option<GeminiClient> {
    let api_key = config.api_key.clone()?;
    Some(GeminiClient::new(
        http.clone(),
        config.gemini_endpoint.clone(),
        api_key,
        config.model.clone(),
    ))
}

fn daily_generator(http: &Client, config: &ResolvedConfig) -> Option<Box<dyn DailyGenerator>> {
    gemini_client(http, config).map(|client| Box::new(client) as Box<dyn DailyGenerator>)
}
