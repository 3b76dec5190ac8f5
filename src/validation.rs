// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request payloads and their validation.
//!
//! Payload fields are kept as raw JSON values so that wrong types are
//! reported as validation failures rather than body rejections.

use crate::error::{AppError, Result};
use serde::Deserialize;
use serde_json::{json, Value};

/// Body of `POST /search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "locationName", default)]
    pub location_name: Option<Value>,
}

/// Body of `POST /create`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateQuestRequest {
    #[serde(alias = "placeId")]
    pub place_id: Option<Value>,
    #[serde(alias = "displayName")]
    pub display_name: Option<Value>,
    pub lat: Option<Value>,
    pub lon: Option<Value>,
    /// `{ "text": ... }` as produced by the search endpoint
    pub wikipedia_extracts: Option<Value>,
    pub summary: Option<Value>,
    #[serde(alias = "auraPoints")]
    pub aura: Option<Value>,
    pub category: Option<Value>,
    pub price: Option<Value>,
    #[serde(rename = "saveToLog", alias = "saveToCsv")]
    pub save_to_log: Option<bool>,
}

/// Quest creation input after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestInput {
    pub place_id: String,
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub summary: Option<String>,
    pub aura: Option<i64>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub save_to_log: bool,
}

/// Check the search text; returns it trimmed.
pub fn validate_search_input(location_name: Option<&Value>) -> Result<String> {
    match location_name {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        other => Err(AppError::validation(
            "Location name is required and must be a non-empty string",
            json!({
                "field": "locationName",
                "value": other.cloned().unwrap_or(Value::Null),
            }),
        )),
    }
}

/// Check every quest field, reporting all violations at once.
pub fn validate_quest_input(request: &CreateQuestRequest) -> Result<QuestInput> {
    let mut violations = Violations::default();

    let place_id = request.place_id.as_ref().and_then(identifier);
    if place_id.is_none() {
        violations.push("place_id", "place_id is required");
    }

    let display_name = request.display_name.as_ref().and_then(non_empty_text);
    if display_name.is_none() {
        violations.push("display_name", "display_name is required");
    }

    let latitude = request.lat.as_ref().and_then(numeric);
    if latitude.is_none() {
        violations.push("lat", "lat is required and must be a number");
    }

    let longitude = request.lon.as_ref().and_then(numeric);
    if longitude.is_none() {
        violations.push("lon", "lon is required and must be a number");
    }

    let price = match &request.price {
        None => None,
        Some(value) => match numeric(value) {
            Some(p) if p >= 0.0 => Some(p),
            _ => {
                violations.push("price", "price must be a non-negative number");
                None
            }
        },
    };

    let aura = match &request.aura {
        None => None,
        Some(value) => match integer(value) {
            Some(a) if a >= 0 => Some(a),
            _ => {
                violations.push("aura", "aura must be a non-negative integer");
                None
            }
        },
    };

    let category = match &request.category {
        None => None,
        Some(value) => {
            let category = non_empty_text(value);
            if category.is_none() {
                violations.push("category", "category must be a non-empty string");
            }
            category
        }
    };

    match (place_id, display_name, latitude, longitude) {
        (Some(place_id), Some(display_name), Some(latitude), Some(longitude))
            if violations.is_empty() =>
        {
            Ok(QuestInput {
                place_id,
                display_name,
                latitude,
                longitude,
                summary: summary_text(request),
                aura,
                category,
                price,
                save_to_log: request.save_to_log.unwrap_or(true),
            })
        }
        _ => Err(violations.into_error()),
    }
}

/// Accumulated validation failures.
#[derive(Default)]
struct Violations {
    fields: Vec<&'static str>,
    errors: Vec<&'static str>,
}

impl Violations {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.fields.push(field);
        self.errors.push(message);
    }

    fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn into_error(self) -> AppError {
        AppError::validation(
            "Invalid quest input data",
            json!({ "errors": self.errors, "fields": self.fields }),
        )
    }
}

fn non_empty_text(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Place ids arrive as strings from our own search endpoint but as numbers
/// from some clients.
fn identifier(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        other => non_empty_text(other),
    }
}

/// A finite number, given either as a JSON number or a numeric string.
fn numeric(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// A whole number; floats such as `400.0` count when they have no
/// fractional part.
fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    }
}

fn whole(n: f64) -> Option<i64> {
    const LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    (n.is_finite() && n.fract() == 0.0 && n.abs() <= LIMIT).then_some(n as i64)
}

/// Summary text supplied with the request, from either accepted field.
fn summary_text(request: &CreateQuestRequest) -> Option<String> {
    let from_extracts = request
        .wikipedia_extracts
        .as_ref()
        .and_then(|e| e.get("text"))
        .and_then(non_empty_text);

    from_extracts.or_else(|| request.summary.as_ref().and_then(non_empty_text))
}
