use thiserror::Error;

/// All the ways a translation or generation provider can fail.
///
/// Failures are values here, not panics: every variant has a degraded
/// fallback somewhere up the stack (the next provider, a hidden card, or an
/// HTTP error body).
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider answered HTTP 429. Never retried.
    #[error("provider rate limited the request")]
    RateLimited,

    /// The provider answered a non-success status other than 429.
    #[error("provider returned HTTP {0}")]
    Status(u16),

    /// The provider answered successfully but carried no usable text.
    #[error("provider returned no usable text")]
    Empty,

    /// The provider's payload did not match the expected shape.
    #[error("unexpected provider response: {0}")]
    Invalid(String),

    /// Transport-level failure (connect, timeout, body decode).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Every configured provider failed for this request.
    #[error("no translation provider could handle the request")]
    Exhausted,
}

impl ProviderError {
    /// `true` for the one failure the HTTP API surfaces verbatim (as 429).
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_detection() {
        assert!(ProviderError::RateLimited.is_rate_limited());
        assert!(!ProviderError::Status(500).is_rate_limited());
        assert!(!ProviderError::Exhausted.is_rate_limited());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ProviderError::Status(503).to_string(),
            "provider returned HTTP 503"
        );
        assert_eq!(
            ProviderError::Invalid("missing candidates".to_string()).to_string(),
            "unexpected provider response: missing candidates"
        );
    }
}
