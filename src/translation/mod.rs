mod error;
mod gemini;
mod mymemory;
mod prompt;
mod resolver;

pub use error::ProviderError;
pub use gemini::GeminiClient;
pub use mymemory::MyMemoryClient;
pub use prompt::{DAILY_QUOTE_PROMPT, TRANSLATION_PROMPT_TEMPLATE, build_translation_prompt};
pub use resolver::{FALLBACK_TEXT, TranslationProvider, TranslationResolver};

use std::time::Duration;

/// Every upstream call shares the same request deadline. The transports the
/// original relied on had no explicit timeout at all; 30 seconds bounds a
/// hung provider without cutting off slow generations.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the HTTP client shared by all API collaborators.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()
}
