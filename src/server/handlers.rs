use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::AppState;
use crate::quotes::DailyQuote;
use crate::translation::{ProviderError, TranslationProvider};

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translation: String,
}

type ApiError = (StatusCode, Json<serde_json::Value>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(serde_json::json!({ "error": message })))
}

/// `POST /api/translate` — proxy one translation through the primary
/// provider. Rate limiting surfaces as 429; everything else collapses to a
/// generic 500 body.
pub async fn translate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    if request.text.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Missing text"));
    }

    let Some(translator) = &state.translator else {
        return Err(api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server API key missing",
        ));
    };

    match translator.translate(&request.text).await {
        Ok(translation) => {
            tracing::info!(chars = request.text.len(), "translated text");
            Ok(Json(TranslateResponse { translation }))
        }
        Err(e) => {
            tracing::error!(error = %e, "translation request failed");
            Err(api_error(provider_error_status(&e), provider_error_message(&e)))
        }
    }
}

/// `GET|POST /api/daily` — today's quote pair via the day-keyed cache.
pub async fn daily(State(state): State<Arc<AppState>>) -> Result<Json<DailyQuote>, ApiError> {
    if !state.daily.has_generator() {
        return Err(api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server API key missing",
        ));
    }

    match state.daily.today().await {
        Some(quote) => Ok(Json(quote)),
        None => Err(api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to generate daily quote",
        )),
    }
}

const fn provider_error_status(error: &ProviderError) -> StatusCode {
    if error.is_rate_limited() {
        StatusCode::TOO_MANY_REQUESTS
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

const fn provider_error_message(error: &ProviderError) -> &'static str {
    if error.is_rate_limited() {
        "Rate limited"
    } else {
        "Translation failed"
    }
}
