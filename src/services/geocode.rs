// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Location resolution: the geocode fallback chain plus summary enrichment.
//!
//! Handles:
//! - Ordered geocode attempts (autocomplete, then search) where only a
//!   "not found" failure moves on to the next attempt
//! - Shape validation of the provider payload
//! - Per-candidate encyclopedia lookups that run concurrently and fall back
//!   to a sentinel independently of each other

use crate::models::{LocationCandidate, RawLocation, NO_SUMMARY};
use crate::services::provider::{
    Api, GeocodeProvider, ProviderError, ProviderResponse, SummaryProvider,
};
use futures_util::{stream, StreamExt};
use serde_json::Value;
use std::sync::Arc;

/// Maximum number of encyclopedia lookups in flight for one search.
const MAX_CONCURRENT_LOOKUPS: usize = 4;

/// Resolves free-text location names into summarized candidates.
#[derive(Clone)]
pub struct LocationResolver {
    attempts: Vec<Arc<dyn GeocodeProvider>>,
    encyclopedia: Arc<dyn SummaryProvider>,
    limit: u32,
}

impl LocationResolver {
    /// `attempts` are tried in order; the first one that does not report
    /// "not found" decides the outcome.
    pub fn new(
        attempts: Vec<Arc<dyn GeocodeProvider>>,
        encyclopedia: Arc<dyn SummaryProvider>,
        limit: u32,
    ) -> Self {
        Self {
            attempts,
            encyclopedia,
            limit,
        }
    }

    /// Resolve a query into candidates, in provider order.
    pub async fn resolve(&self, query: &str) -> Result<Vec<LocationCandidate>, ProviderError> {
        let Some(response) = self.geocode(query).await? else {
            tracing::info!(query, "No geocode provider found the location");
            return Ok(Vec::new());
        };

        let raw = parse_locations(response)?;
        let candidates = self.enrich(raw).await;

        tracing::info!(
            query,
            count = candidates.len(),
            "Fetched locations for query"
        );
        Ok(candidates)
    }

    /// Run the ordered attempts. `None` means every attempt reported "not found".
    async fn geocode(&self, query: &str) -> Result<Option<ProviderResponse>, ProviderError> {
        for attempt in &self.attempts {
            match attempt.geocode(query, self.limit).await {
                Ok(response) => return Ok(Some(response)),
                Err(e) if e.is_not_found() => {
                    tracing::info!(
                        provider = attempt.name(),
                        query,
                        "Geocode attempt found nothing, falling back"
                    );
                }
                Err(e) => {
                    tracing::warn!(provider = attempt.name(), error = %e, "Geocode attempt failed");
                    return Err(e);
                }
            }
        }
        Ok(None)
    }

    /// Attach a summary to every location, keeping the input order.
    async fn enrich(&self, raw: Vec<RawLocation>) -> Vec<LocationCandidate> {
        let lookups: Vec<_> = raw
            .into_iter()
            .map(|location| {
                let encyclopedia = Arc::clone(&self.encyclopedia);
                async move {
                    let summary = match location.summary() {
                        Some(text) => text.to_string(),
                        None => lookup_summary(encyclopedia.as_ref(), &location).await,
                    };
                    location.into_candidate(summary)
                }
            })
            .collect();

        stream::iter(lookups)
            .buffered(MAX_CONCURRENT_LOOKUPS)
            .collect()
            .await
    }
}

/// Encyclopedia lookup for one location; failures yield the sentinel.
async fn lookup_summary(encyclopedia: &dyn SummaryProvider, location: &RawLocation) -> String {
    let Some(title) = location.lookup_title() else {
        return NO_SUMMARY.to_string();
    };

    match encyclopedia.summary(&title).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(title = %title, error = %e, "Summary lookup failed, using default");
            NO_SUMMARY.to_string()
        }
    }
}

/// Validate the payload is a list and read each element field by field.
fn parse_locations(response: ProviderResponse) -> Result<Vec<RawLocation>, ProviderError> {
    let items = match response.body {
        Value::Array(items) => items,
        body => {
            return Err(ProviderError::Malformed {
                api: Api::LocationIq,
                status: response.status,
                body,
            })
        }
    };

    Ok(items.iter().map(RawLocation::from_value).collect())
}
