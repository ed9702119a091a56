use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::Deserialize;

/// One advice snippet from the public advice service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdviceSlip {
    pub id: u32,
    pub advice: String,
}

#[derive(Debug, Deserialize)]
struct AdviceEnvelope {
    slip: AdviceSlip,
}

/// Client for the random-advice service.
pub struct AdviceClient {
    http: Client,
    endpoint: String,
}

impl AdviceClient {
    pub const fn new(http: Client, endpoint: String) -> Self {
        Self { http, endpoint }
    }

    /// Fetches one random advice slip.
    pub async fn fetch_random(&self) -> Result<AdviceSlip> {
        let url = format!("{}/advice", self.endpoint.trim_end_matches('/'));

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach advice service: {url}"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Advice service returned HTTP {status}");
        }

        let envelope: AdviceEnvelope = response
            .json()
            .await
            .context("Failed to parse advice response")?;

        Ok(envelope.slip)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_advice_envelope() {
        let json = r#"{"slip": {"id": 117, "advice": "Be yourself."}}"#;
        let envelope: AdviceEnvelope = serde_json::from_str(json).unwrap();

        assert_eq!(
            envelope.slip,
            AdviceSlip {
                id: 117,
                advice: "Be yourself.".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_missing_slip() {
        let json = r#"{"advice": "Be yourself."}"#;
        assert!(serde_json::from_str::<AdviceEnvelope>(json).is_err());
    }
}
