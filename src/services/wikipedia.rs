// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wikipedia REST summary client.

use crate::services::provider::{
    check_response, classify_transport, Api, ProviderError, SummaryProvider,
};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Wikipedia `page/summary` client.
#[derive(Clone)]
pub struct WikipediaClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

/// Subset of the summary payload we use.
#[derive(Debug, Deserialize)]
struct PageSummary {
    extract: Option<String>,
}

impl WikipediaClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("quest-forge/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }
}

#[async_trait]
impl SummaryProvider for WikipediaClient {
    async fn summary(&self, title: &str) -> Result<String, ProviderError> {
        // REST titles use underscores for spaces
        let slug = title.trim().replace(' ', "_");
        let url = format!(
            "{}/page/summary/{}",
            self.base_url,
            urlencoding::encode(&slug)
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| classify_transport(Api::Wikipedia, self.timeout, e))?;

        let raw = check_response(Api::Wikipedia, self.timeout, response).await?;

        let extract = serde_json::from_value::<PageSummary>(raw.body.clone())
            .ok()
            .and_then(|s| s.extract)
            .filter(|text| !text.trim().is_empty());

        extract.ok_or(ProviderError::Malformed {
            api: Api::Wikipedia,
            status: raw.status,
            body: raw.body,
        })
    }
}
