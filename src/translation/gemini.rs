use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::error::ProviderError;
use super::prompt::{DAILY_QUOTE_PROMPT, build_translation_prompt};
use super::resolver::TranslationProvider;
use crate::quotes::DailyQuote;
use crate::quotes::daily::DailyGenerator;

const TRANSLATE_TEMPERATURE: f64 = 0.1;
const TRANSLATE_MAX_OUTPUT_TOKENS: u32 = 256;
const DAILY_TEMPERATURE: f64 = 0.7;
const JSON_MIME_TYPE: &str = "application/json";

// Use Cow to avoid cloning prompts that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: Cow<'a, str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Client for a Gemini-style `generateContent` endpoint.
///
/// Serves both as the primary translation provider and as the daily-quote
/// generator. A 429 response is reported as [`ProviderError::RateLimited`]
/// and never retried here.
pub struct GeminiClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(http: Client, endpoint: String, api_key: String, model: String) -> Self {
        Self {
            http,
            endpoint,
            api_key,
            model,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    async fn generate(
        &self,
        prompt: &str,
        generation_config: GenerationConfig,
    ) -> Result<String, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Cow::Borrowed(prompt),
                }],
            }],
            generation_config,
        };

        let response = self
            .http
            .post(self.url())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: GenerateContentResponse = response.json().await?;
        first_candidate_text(body).ok_or(ProviderError::Empty)
    }
}

#[async_trait]
impl TranslationProvider for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn translate(&self, text: &str) -> Result<String, ProviderError> {
        let prompt = build_translation_prompt(text);
        let raw = self
            .generate(
                &prompt,
                GenerationConfig {
                    temperature: TRANSLATE_TEMPERATURE,
                    max_output_tokens: Some(TRANSLATE_MAX_OUTPUT_TOKENS),
                    response_mime_type: None,
                },
            )
            .await?;

        let cleaned = strip_edge_quotes(raw.trim());
        if cleaned.is_empty() {
            return Err(ProviderError::Empty);
        }
        Ok(cleaned.to_string())
    }
}

#[async_trait]
impl DailyGenerator for GeminiClient {
    async fn generate_daily(&self) -> Result<DailyQuote, ProviderError> {
        let raw = self
            .generate(
                DAILY_QUOTE_PROMPT,
                GenerationConfig {
                    temperature: DAILY_TEMPERATURE,
                    max_output_tokens: None,
                    response_mime_type: Some(JSON_MIME_TYPE),
                },
            )
            .await?;

        let quote: DailyQuote = serde_json::from_str(raw.trim())
            .map_err(|e| ProviderError::Invalid(e.to_string()))?;
        if quote.en.trim().is_empty() || quote.my.trim().is_empty() {
            return Err(ProviderError::Invalid(
                "daily quote payload missing text".to_string(),
            ));
        }
        Ok(quote)
    }
}

/// Extracts the first candidate's first part, the only field the endpoint is
/// expected to fill for these prompts.
fn first_candidate_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text
        .filter(|text| !text.is_empty())
}

/// Strips one leading and one trailing quote character, independently.
///
/// Models like to wrap short translations in quotes; the original card text
/// already carries its own.
fn strip_edge_quotes(text: &str) -> &str {
    let text = text.strip_prefix(['"', '\'']).unwrap_or(text);
    text.strip_suffix(['"', '\'']).unwrap_or(text)
}
