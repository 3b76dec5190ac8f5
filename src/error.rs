// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use crate::services::provider::ProviderError;
use crate::services::quest_log::QuestLogError;
use crate::time_utils::format_iso8601;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error(transparent)]
    Upstream(ProviderError),

    #[error("Failed to save quest to CSV")]
    Storage(#[from] QuestLogError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        AppError::Validation {
            message: message.into(),
            details,
        }
    }

    /// Short name of the error kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "ValidationError",
            AppError::Upstream(_) | AppError::Storage(_) => "APIError",
            AppError::Internal(_) => "UnknownError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) | AppError::Storage(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Classified provider failures are reported as upstream errors. A transport
/// failure that is neither a response nor a timeout has no useful details for
/// the client and is reported as an internal error.
impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Transport { .. } => {
                AppError::Internal(anyhow::Error::new(err).context("Provider request failed"))
            }
            other => AppError::Upstream(other),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(
            "Request body must be valid JSON",
            json!({ "error": rejection.body_text() }),
        )
    }
}

/// JSON error envelope.
#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ErrorResponse {
    pub error: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "Record<string, unknown> | null"))]
    pub details: Option<Value>,
    pub timestamp: String,
}

/// Attached to error responses so the logging middleware can report them.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub message: String,
    pub debug: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let report = ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
            debug: format!("{:?}", self),
        };

        let (error, details) = match self {
            AppError::Validation { message, details } => (message, Some(details)),
            AppError::Upstream(err) => (err.to_string(), Some(err.details())),
            AppError::Storage(err) => (
                "Failed to save quest to CSV".to_string(),
                Some(json!({ "error": err.to_string() })),
            ),
            AppError::Internal(_) => ("Internal Server Error".to_string(), None),
        };

        let body = ErrorResponse {
            error,
            details,
            timestamp: format_iso8601(chrono::Utc::now()),
        };

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(report);
        response
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
