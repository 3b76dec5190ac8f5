// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Quest description generation.
//!
//! Generation never fails a request: any provider failure is logged and the
//! default description is used instead.

use crate::models::NO_SUMMARY;
use crate::services::provider::TextGenerator;
use std::sync::Arc;

/// Writes short promotional quest descriptions.
#[derive(Clone)]
pub struct DescriptionService {
    generator: Arc<dyn TextGenerator>,
}

impl DescriptionService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Produce a two-sentence description for a location.
    ///
    /// The result is never empty.
    pub async fn describe(&self, display_name: &str, summary: Option<&str>) -> String {
        let prompt = build_prompt(display_name, summary);

        match self.generator.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!(
                    location = display_name,
                    "No description generated, using default"
                );
                default_description(display_name)
            }
            Err(e) => {
                tracing::warn!(
                    location = display_name,
                    error = %e,
                    "Description generation failed, using default"
                );
                default_description(display_name)
            }
        }
    }
}

/// Prompt for the text generator: distill the summary when there is a real
/// one, otherwise describe the place by name.
pub fn build_prompt(display_name: &str, summary: Option<&str>) -> String {
    match summary.map(str::trim) {
        Some(text) if !text.is_empty() && text != NO_SUMMARY => format!(
            "Summarize the following into a fun, two-sentence description for a quest: {}",
            text
        ),
        _ => format!(
            "Create a fun, two-sentence description for a quest based on the location: {}.",
            display_name
        ),
    }
}

/// Fallback description used when generation fails.
pub fn default_description(display_name: &str) -> String {
    format!("Explore {} and uncover its secrets!", display_name)
}
