// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error logging middleware.

use crate::error::ErrorReport;
use axum::{extract::Request, middleware::Next, response::Response};

/// Log every error response produced from an `AppError` together with the
/// request method and path.
pub async fn log_errors(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    if let Some(report) = response.extensions().get::<ErrorReport>() {
        tracing::error!(
            method = %method,
            path = %path,
            status = response.status().as_u16(),
            error_name = report.kind,
            debug = %report.debug,
            "Error: {}",
            report.message
        );
    }

    response
}
