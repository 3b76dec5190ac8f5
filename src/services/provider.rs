// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! External provider seams and the shared failure taxonomy.
//!
//! Every outbound call (geocoding, encyclopedia, text generation) goes through
//! one of the traits below, and every failure is classified by HTTP status or
//! transport error kind into a [`ProviderError`].

use async_trait::async_trait;
use reqwest::{header::RETRY_AFTER, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

/// External APIs this service talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    LocationIq,
    Wikipedia,
    Gemini,
}

impl Api {
    pub fn as_str(&self) -> &'static str {
        match self {
            Api::LocationIq => "LocationIQ",
            Api::Wikipedia => "Wikipedia",
            Api::Gemini => "Gemini",
        }
    }
}

impl std::fmt::Display for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified failure of an external provider call.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("{api} API found no results")]
    NotFound { api: Api, status: u16, body: Value },

    #[error("{api} API rate limit exceeded")]
    RateLimited {
        api: Api,
        status: u16,
        body: Value,
        retry_after: Option<String>,
    },

    #[error("{api} API authentication failed")]
    Unauthorized { api: Api, status: u16, body: Value },

    #[error("{api} API error: {reason}")]
    Upstream {
        api: Api,
        status: u16,
        reason: String,
        body: Value,
    },

    #[error("Invalid response from {api} API")]
    Malformed { api: Api, status: u16, body: Value },

    #[error("{api} API request timed out")]
    Timeout { api: Api, timeout: Duration },

    #[error("{api} API request failed: {message}")]
    Transport { api: Api, message: String },
}

impl ProviderError {
    pub fn api(&self) -> Api {
        match self {
            ProviderError::NotFound { api, .. }
            | ProviderError::RateLimited { api, .. }
            | ProviderError::Unauthorized { api, .. }
            | ProviderError::Upstream { api, .. }
            | ProviderError::Malformed { api, .. }
            | ProviderError::Timeout { api, .. }
            | ProviderError::Transport { api, .. } => *api,
        }
    }

    /// True for the "no such place" class of failure that triggers a fallback.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound { .. })
    }

    /// Details payload for the error envelope.
    pub fn details(&self) -> Value {
        let api = self.api().as_str();
        match self {
            ProviderError::NotFound { status, body, .. }
            | ProviderError::Unauthorized { status, body, .. }
            | ProviderError::Upstream { status, body, .. }
            | ProviderError::Malformed { status, body, .. } => {
                json!({ "status": status, "data": body, "api": api })
            }
            ProviderError::RateLimited {
                status,
                body,
                retry_after,
                ..
            } => json!({
                "status": status,
                "data": body,
                "api": api,
                "retryAfter": retry_after.as_deref().unwrap_or("unknown"),
            }),
            ProviderError::Timeout { timeout, .. } => {
                json!({ "api": api, "timeout": timeout.as_millis() as u64 })
            }
            ProviderError::Transport { message, .. } => json!({ "api": api, "error": message }),
        }
    }
}

/// Map a non-success HTTP status to the failure taxonomy.
pub fn classify_status(
    api: Api,
    status: StatusCode,
    retry_after: Option<String>,
    body: Value,
) -> ProviderError {
    let code = status.as_u16();
    match status {
        StatusCode::NOT_FOUND => ProviderError::NotFound {
            api,
            status: code,
            body,
        },
        StatusCode::TOO_MANY_REQUESTS => {
            tracing::warn!(api = %api, "Provider rate limit hit (429)");
            ProviderError::RateLimited {
                api,
                status: code,
                body,
                retry_after,
            }
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Unauthorized {
            api,
            status: code,
            body,
        },
        _ => ProviderError::Upstream {
            api,
            status: code,
            reason: status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            body,
        },
    }
}

/// Map a transport-level reqwest error to the failure taxonomy.
pub fn classify_transport(api: Api, timeout: Duration, err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout { api, timeout }
    } else {
        ProviderError::Transport {
            api,
            message: err.to_string(),
        }
    }
}

/// Read a response body as JSON, falling back to a JSON string of the raw text.
async fn read_body(
    api: Api,
    timeout: Duration,
    response: reqwest::Response,
) -> Result<Value, ProviderError> {
    let text = response
        .text()
        .await
        .map_err(|e| classify_transport(api, timeout, e))?;
    Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}

/// Check response status and return the JSON payload, or a classified error.
pub async fn check_response(
    api: Api,
    timeout: Duration,
    response: reqwest::Response,
) -> Result<ProviderResponse, ProviderError> {
    let status = response.status();
    if status.is_success() {
        let body = read_body(api, timeout, response).await?;
        return Ok(ProviderResponse {
            status: status.as_u16(),
            body,
        });
    }

    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = read_body(api, timeout, response).await?;
    Err(classify_status(api, status, retry_after, body))
}

/// Raw successful provider response, before shape validation.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: Value,
}

/// One geocoding attempt in the fallback chain.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// Short name used in logs (e.g. "autocomplete").
    fn name(&self) -> &'static str;

    async fn geocode(&self, query: &str, limit: u32) -> Result<ProviderResponse, ProviderError>;
}

/// Encyclopedia summary lookup by article title.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn summary(&self, title: &str) -> Result<String, ProviderError>;
}

/// Generative-text completion for a prompt.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
