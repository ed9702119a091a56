//! Day-keyed caching around the daily quote generation call.

use async_trait::async_trait;
use chrono::Local;

use super::{DailyEntry, DailyQuote};
use crate::cache::DailyCache;
use crate::translation::ProviderError;

/// Current local calendar date as the cache key, `YYYY-MM-DD`.
pub fn today_key() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Produces one daily quote pair with the translation already included.
#[async_trait]
pub trait DailyGenerator: Send + Sync {
    async fn generate_daily(&self) -> Result<DailyQuote, ProviderError>;
}

/// Serves the daily quote through the single-slot cache.
///
/// Without a configured generator (no API key) the service degrades to
/// returning `None`; generation and cache failures are swallowed the same
/// way so the caller only ever decides whether to render the card.
pub struct DailyQuoteService {
    cache: DailyCache,
    generator: Option<Box<dyn DailyGenerator>>,
}

impl DailyQuoteService {
    pub fn new(cache: DailyCache, generator: Option<Box<dyn DailyGenerator>>) -> Self {
        Self { cache, generator }
    }

    pub const fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// The quote for today, from cache when the stored date key still
    /// matches, freshly generated otherwise.
    pub async fn today(&self) -> Option<DailyQuote> {
        self.quote_for(&today_key()).await
    }

    /// Same-day hits never touch the network. A stale or missing entry
    /// triggers exactly one generation call, whose result overwrites the
    /// slot; nothing is written on failure.
    pub async fn quote_for(&self, date_key: &str) -> Option<DailyQuote> {
        match self.cache.get() {
            Ok(Some(entry)) if entry.is_valid_for(date_key) => return Some(entry.quote()),
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "failed to read daily quote cache"),
        }

        let generator = self.generator.as_ref()?;
        let quote = match generator.generate_daily().await {
            Ok(quote) => quote,
            Err(e) => {
                tracing::warn!(error = %e, "daily quote generation failed");
                return None;
            }
        };

        let entry = DailyEntry::new(date_key, &quote);
        if let Err(e) = self.cache.put(&entry) {
            tracing::warn!(error = %e, "failed to persist daily quote");
        }

        Some(quote)
    }
}
