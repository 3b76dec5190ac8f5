// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Quest record model and assembly.

use crate::validation::QuestInput;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub const DEFAULT_AURA: i64 = 400;
pub const DEFAULT_CATEGORY: &str = "Adventure";

/// A generated quest, as returned to the client and appended to the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct QuestRecord {
    pub title: String,
    #[serde(rename = "aura", alias = "auraPoints")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub aura_points: i64,
    pub category: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price: Option<f64>,
}

impl QuestRecord {
    /// Build a quest from validated input and a resolved description,
    /// applying defaults for omitted optional fields.
    pub fn assemble(input: &QuestInput, description: String) -> Self {
        Self {
            title: input.display_name.clone(),
            aura_points: input.aura.unwrap_or(DEFAULT_AURA),
            category: input
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            description,
            latitude: input.latitude,
            longitude: input.longitude,
            price: input.price,
        }
    }
}
