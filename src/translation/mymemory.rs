use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::error::ProviderError;
use super::resolver::TranslationProvider;

/// The lookup pair is fixed: the whole product translates English to Burmese.
const LANGUAGE_PAIR: &str = "en|my";

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(rename = "responseStatus")]
    response_status: i64,
    #[serde(rename = "responseData")]
    response_data: LookupData,
}

#[derive(Debug, Deserialize)]
struct LookupData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Client for a MyMemory-style bilingual lookup service.
///
/// The free fallback provider: keyless, one GET per lookup, success signaled
/// by an in-body status of 200 rather than the HTTP status alone.
pub struct MyMemoryClient {
    http: Client,
    endpoint: String,
}

impl MyMemoryClient {
    pub fn new(http: Client, endpoint: String) -> Self {
        Self { http, endpoint }
    }
}

#[async_trait]
impl TranslationProvider for MyMemoryClient {
    fn name(&self) -> &'static str {
        "mymemory"
    }

    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let url = format!("{}/get", self.endpoint.trim_end_matches('/'));

        let response = self
            .http
            .get(url)
            .query(&[("q", text), ("langpair", LANGUAGE_PAIR)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: LookupResponse = response.json().await?;
        extract_translation(body)
    }
}

fn extract_translation(body: LookupResponse) -> Result<String, ProviderError> {
    if body.response_status != 200 {
        return Err(ProviderError::Invalid(format!(
            "lookup status {}",
            body.response_status
        )));
    }

    match body.response_data.translated_text {
        Some(translated) if !translated.trim().is_empty() => Ok(translated),
        _ => Err(ProviderError::Empty),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(json: &str) -> LookupResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extract_translation_success() {
        let body = parse(
            r#"{"responseStatus":200,"responseData":{"translatedText":"ကိုယ်ပိုင်ဖြစ်ပါ"}}"#,
        );
        assert_eq!(extract_translation(body).unwrap(), "ကိုယ်ပိုင်ဖြစ်ပါ");
    }

    #[test]
    fn test_extract_translation_non_success_status() {
        let body = parse(r#"{"responseStatus":403,"responseData":{"translatedText":"x"}}"#);
        let err = extract_translation(body).unwrap_err();
        assert!(matches!(err, ProviderError::Invalid(_)));
        assert!(err.to_string().contains("403"));
    }

    #[test]
    fn test_extract_translation_blank_text() {
        let body = parse(r#"{"responseStatus":200,"responseData":{"translatedText":"  "}}"#);
        assert!(matches!(
            extract_translation(body).unwrap_err(),
            ProviderError::Empty
        ));

        let body = parse(r#"{"responseStatus":200,"responseData":{"translatedText":null}}"#);
        assert!(matches!(
            extract_translation(body).unwrap_err(),
            ProviderError::Empty
        ));
    }

    #[test]
    fn test_language_pair_is_english_to_burmese() {
        assert_eq!(LANGUAGE_PAIR, "en|my");
    }
}
