// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! LocationIQ geocoding client.
//!
//! The same client backs both attempts of the geocode chain: the autocomplete
//! endpoint first, the full search endpoint as the fallback.

use crate::services::provider::{
    check_response, classify_transport, Api, GeocodeProvider, ProviderError, ProviderResponse,
};
use async_trait::async_trait;
use std::time::Duration;

/// LocationIQ endpoint a client instance queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocodeEndpoint {
    Autocomplete,
    Search,
}

impl GeocodeEndpoint {
    fn path(&self) -> &'static str {
        match self {
            GeocodeEndpoint::Autocomplete => "autocomplete",
            GeocodeEndpoint::Search => "search",
        }
    }

    /// Endpoint-specific query parameters. Only search can return extra
    /// tags, which carry the canonical Wikipedia reference.
    fn extra_params(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            GeocodeEndpoint::Autocomplete => &[],
            GeocodeEndpoint::Search => &[("extratags", "1")],
        }
    }
}

/// LocationIQ API client bound to one endpoint.
#[derive(Clone)]
pub struct LocationIqClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    endpoint: GeocodeEndpoint,
    timeout: Duration,
}

impl LocationIqClient {
    pub fn new(
        base_url: &str,
        api_key: String,
        endpoint: GeocodeEndpoint,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            endpoint,
            timeout,
        })
    }
}

#[async_trait]
impl GeocodeProvider for LocationIqClient {
    fn name(&self) -> &'static str {
        self.endpoint.path()
    }

    async fn geocode(&self, query: &str, limit: u32) -> Result<ProviderResponse, ProviderError> {
        let url = format!("{}/{}", self.base_url, self.endpoint.path());
        let limit_param = limit.to_string();

        tracing::debug!(endpoint = self.endpoint.path(), query, limit, "Querying LocationIQ");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("limit", limit_param.as_str()),
                ("format", "json"),
            ])
            .query(self.endpoint.extra_params())
            .send()
            .await
            .map_err(|e| classify_transport(Api::LocationIq, self.timeout, e))?;

        check_response(Api::LocationIq, self.timeout, response).await
    }
}
