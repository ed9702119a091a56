use async_trait::async_trait;

use super::error::ProviderError;

/// Fixed placeholder shown when every translation attempt fails.
pub const FALLBACK_TEXT: &str = "ဘာသာပြန်၍မရပါ";

/// A single translation backend.
///
/// Implementations perform exactly one request per call: the resolver owns
/// the fallback chain, providers never retry on their own.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Short provider name for log events.
    fn name(&self) -> &'static str;

    /// Translates `text` to Burmese.
    async fn translate(&self, text: &str) -> Result<String, ProviderError>;
}

/// Resolves a Burmese translation by walking the provider chain.
///
/// The primary provider (the generative API) is optional: without an API key
/// the resolver skips straight to the fallback lookup service. At most one
/// fallback hop is taken; nothing is retried.
pub struct TranslationResolver {
    primary: Option<Box<dyn TranslationProvider>>,
    fallback: Box<dyn TranslationProvider>,
}

impl TranslationResolver {
    pub fn new(
        primary: Option<Box<dyn TranslationProvider>>,
        fallback: Box<dyn TranslationProvider>,
    ) -> Self {
        Self { primary, fallback }
    }

    /// Resolves a translation, distinguishing real failures from results.
    ///
    /// Empty input short-circuits to `Ok("")` without any provider call. A
    /// primary failure (including rate limiting) or an empty primary result
    /// falls through to the fallback provider exactly once; if that also
    /// fails the error is [`ProviderError::Exhausted`].
    pub async fn resolve(&self, text: &str) -> Result<String, ProviderError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        if let Some(primary) = &self.primary {
            match primary.translate(text).await {
                Ok(translated) if !translated.is_empty() => return Ok(translated),
                Ok(_) => {
                    tracing::debug!(provider = primary.name(), "empty translation, falling back");
                }
                Err(e) => {
                    tracing::debug!(provider = primary.name(), error = %e, "translation failed, falling back");
                }
            }
        }

        match self.fallback.translate(text).await {
            Ok(translated) if !translated.is_empty() => Ok(translated),
            Ok(_) => Err(ProviderError::Exhausted),
            Err(e) => {
                tracing::debug!(provider = self.fallback.name(), error = %e, "fallback translation failed");
                Err(ProviderError::Exhausted)
            }
        }
    }

    /// Display form of [`resolve`](Self::resolve): empty input stays empty,
    /// any failure becomes the fixed fallback text.
    pub async fn resolve_or_fallback(&self, text: &str) -> String {
        match self.resolve(text).await {
            Ok(translated) => translated,
            Err(_) => FALLBACK_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Copy)]
    enum Behavior {
        Succeed(&'static str),
        ReturnEmpty,
        RateLimit,
        Fail,
    }

    struct FakeProvider {
        behavior: Behavior,
        calls: Arc<AtomicUsize>,
    }

    impl FakeProvider {
        fn boxed(behavior: Behavior) -> (Box<dyn TranslationProvider>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let provider = Self {
                behavior,
                calls: Arc::clone(&calls),
            };
            (Box::new(provider), calls)
        }
    }

    #[async_trait]
    impl TranslationProvider for FakeProvider {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn translate(&self, _text: &str) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                Behavior::Succeed(text) => Ok(text.to_string()),
                Behavior::ReturnEmpty => Ok(String::new()),
                Behavior::RateLimit => Err(ProviderError::RateLimited),
                Behavior::Fail => Err(ProviderError::Status(500)),
            }
        }
    }

    #[tokio::test]
    async fn test_empty_input_short_circuits() {
        let (primary, primary_calls) = FakeProvider::boxed(Behavior::Succeed("မလို"));
        let (fallback, fallback_calls) = FakeProvider::boxed(Behavior::Succeed("မလို"));
        let resolver = TranslationResolver::new(Some(primary), fallback);

        assert_eq!(resolver.resolve("").await.unwrap(), "");
        assert_eq!(resolver.resolve_or_fallback("").await, "");
        assert_eq!(primary_calls.load(Ordering::SeqCst), 0);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_primary_success_skips_fallback() {
        let (primary, _) = FakeProvider::boxed(Behavior::Succeed("ကိုယ်ပိုင်ဖြစ်ပါ"));
        let (fallback, fallback_calls) = FakeProvider::boxed(Behavior::Succeed("unused"));
        let resolver = TranslationResolver::new(Some(primary), fallback);

        assert_eq!(
            resolver.resolve("Be yourself.").await.unwrap(),
            "ကိုယ်ပိုင်ဖြစ်ပါ"
        );
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_rate_limited_primary_invokes_fallback_once() {
        let (primary, primary_calls) = FakeProvider::boxed(Behavior::RateLimit);
        let (fallback, fallback_calls) = FakeProvider::boxed(Behavior::Succeed("နောက်ဆုံးလမ်း"));
        let resolver = TranslationResolver::new(Some(primary), fallback);

        assert_eq!(
            resolver.resolve("last resort").await.unwrap(),
            "နောက်ဆုံးလမ်း"
        );
        assert_eq!(primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_primary_result_falls_back() {
        let (primary, _) = FakeProvider::boxed(Behavior::ReturnEmpty);
        let (fallback, fallback_calls) = FakeProvider::boxed(Behavior::Succeed("အဆင်ပြေ"));
        let resolver = TranslationResolver::new(Some(primary), fallback);

        assert_eq!(resolver.resolve("fine").await.unwrap(), "အဆင်ပြေ");
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_primary_goes_straight_to_fallback() {
        let (fallback, fallback_calls) = FakeProvider::boxed(Behavior::Succeed("တိုက်ရိုက်"));
        let resolver = TranslationResolver::new(None, fallback);

        assert_eq!(resolver.resolve("direct").await.unwrap(), "တိုက်ရိုက်");
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_both_providers_failing_is_exhausted() {
        let (primary, _) = FakeProvider::boxed(Behavior::Fail);
        let (fallback, fallback_calls) = FakeProvider::boxed(Behavior::Fail);
        let resolver = TranslationResolver::new(Some(primary), fallback);

        let err = resolver.resolve("doomed").await.unwrap_err();
        assert!(matches!(err, ProviderError::Exhausted));
        assert_eq!(fallback_calls.load(Ordering::SeqCst), 1);

        assert_eq!(resolver.resolve_or_fallback("doomed").await, FALLBACK_TEXT);
    }

    #[tokio::test]
    async fn test_nonempty_input_always_yields_nonempty_display_text() {
        let (primary, _) = FakeProvider::boxed(Behavior::Fail);
        let (fallback, _) = FakeProvider::boxed(Behavior::ReturnEmpty);
        let resolver = TranslationResolver::new(Some(primary), fallback);

        let shown = resolver.resolve_or_fallback("anything").await;
        assert!(!shown.is_empty());
        assert_eq!(shown, FALLBACK_TEXT);
    }
}
