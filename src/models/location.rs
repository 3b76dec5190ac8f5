// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Geocoded location models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Summary text used when no encyclopedia extract could be found.
pub const NO_SUMMARY: &str = "No Wikipedia data available";

/// Location object as returned by the geocoding provider.
///
/// Every field is optional; LocationIQ omits fields freely and sends
/// coordinates as strings. Fields are read one at a time so that a single
/// oddly typed field never discards the rest of the location.
#[derive(Debug, Clone, Default)]
pub struct RawLocation {
    pub place_id: Option<Value>,
    pub display_name: Option<String>,
    pub lat: Option<Value>,
    pub lon: Option<Value>,
    pub wikipedia_extracts: Option<SummaryExtract>,
    pub extratags: Option<ExtraTags>,
}

/// Provider extra tags (only the Wikipedia reference is used).
#[derive(Debug, Clone, Default)]
pub struct ExtraTags {
    /// Canonical article reference, e.g. `"en:Eiffel Tower"`.
    pub wikipedia: Option<String>,
}

impl RawLocation {
    /// Read a provider element field by field. Wrong-typed fields count as
    /// missing; anything that is not an object yields an empty location.
    pub fn from_value(value: &Value) -> Self {
        let scalar = |name: &str| {
            value
                .get(name)
                .filter(|v| v.is_string() || v.is_number())
                .cloned()
        };
        let text = |pointer: &str| {
            value
                .pointer(pointer)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            place_id: scalar("place_id"),
            display_name: text("/display_name"),
            lat: scalar("lat"),
            lon: scalar("lon"),
            wikipedia_extracts: text("/wikipedia_extracts/text").map(|text| SummaryExtract { text }),
            extratags: text("/extratags/wikipedia").map(|wikipedia| ExtraTags {
                wikipedia: Some(wikipedia),
            }),
        }
    }

    /// Provider-supplied summary text, if it carries a usable one.
    pub fn summary(&self) -> Option<&str> {
        self.wikipedia_extracts
            .as_ref()
            .map(|e| e.text.as_str())
            .filter(|text| !text.trim().is_empty())
    }

    /// Title to look up in the encyclopedia.
    ///
    /// Prefers the canonical reference (language prefix stripped), otherwise
    /// the leading segment of the display name.
    pub fn lookup_title(&self) -> Option<String> {
        let canonical = self
            .extratags
            .as_ref()
            .and_then(|t| t.wikipedia.as_deref())
            .map(|reference| match reference.split_once(':') {
                Some((lang, title)) if is_language_code(lang) => title,
                _ => reference,
            })
            .map(str::trim)
            .filter(|title| !title.is_empty());

        canonical
            .or_else(|| {
                self.display_name
                    .as_deref()
                    .and_then(|name| name.split(',').next())
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
            })
            .map(str::to_string)
    }

    /// Build the candidate, substituting placeholders for missing fields.
    pub fn into_candidate(self, summary: String) -> LocationCandidate {
        LocationCandidate {
            place_id: self
                .place_id
                .as_ref()
                .and_then(scalar_text)
                .unwrap_or_else(|| "unknown".to_string()),
            display_name: self
                .display_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Unknown Location".to_string()),
            lat: self
                .lat
                .as_ref()
                .and_then(scalar_text)
                .unwrap_or_else(|| "0".to_string()),
            lon: self
                .lon
                .as_ref()
                .and_then(scalar_text)
                .unwrap_or_else(|| "0".to_string()),
            wikipedia_extracts: SummaryExtract { text: summary },
        }
    }
}

fn is_language_code(prefix: &str) -> bool {
    (2..=3).contains(&prefix.len()) && prefix.chars().all(|c| c.is_ascii_lowercase())
}

/// Text form of a string or number JSON value; empty strings count as absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Encyclopedia summary wrapper, matching the provider's field shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SummaryExtract {
    #[serde(default)]
    pub text: String,
}

/// One search result returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LocationCandidate {
    pub place_id: String,
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    pub wikipedia_extracts: SummaryExtract,
}

impl LocationCandidate {
    pub fn summary_text(&self) -> &str {
        &self.wikipedia_extracts.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawLocation {
        RawLocation::from_value(&value)
    }

    #[test]
    fn test_lookup_title_prefers_canonical_reference() {
        let loc = raw(json!({
            "display_name": "Tour Eiffel, Avenue Anatole France, Paris",
            "extratags": { "wikipedia": "fr:Tour Eiffel" }
        }));
        assert_eq!(loc.lookup_title().as_deref(), Some("Tour Eiffel"));
    }

    #[test]
    fn test_lookup_title_falls_back_to_display_name() {
        let loc = raw(json!({ "display_name": "Golden Gate Park, San Francisco, CA" }));
        assert_eq!(loc.lookup_title().as_deref(), Some("Golden Gate Park"));

        assert_eq!(RawLocation::default().lookup_title(), None);
    }

    #[test]
    fn test_lookup_title_keeps_colons_in_titles() {
        let loc = raw(json!({ "extratags": { "wikipedia": "Star Wars: Galaxy's Edge" } }));
        assert_eq!(
            loc.lookup_title().as_deref(),
            Some("Star Wars: Galaxy's Edge")
        );
    }

    #[test]
    fn test_into_candidate_defaults() {
        let candidate = RawLocation::default().into_candidate(NO_SUMMARY.to_string());
        assert_eq!(candidate.place_id, "unknown");
        assert_eq!(candidate.display_name, "Unknown Location");
        assert_eq!(candidate.lat, "0");
        assert_eq!(candidate.lon, "0");
        assert_eq!(candidate.summary_text(), NO_SUMMARY);
    }

    #[test]
    fn test_into_candidate_accepts_numeric_fields() {
        let candidate = raw(json!({
            "place_id": 331_200_112,
            "display_name": "Reykjavík, Iceland",
            "lat": "64.1466",
            "lon": -21.9426
        }))
        .into_candidate("Capital of Iceland.".to_string());

        assert_eq!(candidate.place_id, "331200112");
        assert_eq!(candidate.lat, "64.1466");
        assert_eq!(candidate.lon, "-21.9426");

        let wire = serde_json::to_value(&candidate).unwrap();
        assert_eq!(wire["wikipedia_extracts"]["text"], "Capital of Iceland.");
    }

    #[test]
    fn test_wrong_typed_field_keeps_the_others() {
        let loc = raw(json!({
            "place_id": "42",
            "display_name": "Kyoto, Japan",
            "lat": "35.0",
            "lon": 135.7,
            "wikipedia_extracts": { "text": null },
            "extratags": { "wikipedia": 12 }
        }));
        assert!(loc.summary().is_none());
        assert_eq!(loc.lookup_title().as_deref(), Some("Kyoto"));

        let candidate = loc.into_candidate(NO_SUMMARY.to_string());
        assert_eq!(candidate.place_id, "42");
        assert_eq!(candidate.display_name, "Kyoto, Japan");
        assert_eq!(candidate.lat, "35.0");
        assert_eq!(candidate.lon, "135.7");
    }

    #[test]
    fn test_non_object_element_is_empty() {
        let candidate = raw(json!("not an object")).into_candidate(NO_SUMMARY.to_string());
        assert_eq!(candidate.place_id, "unknown");
        assert_eq!(candidate.display_name, "Unknown Location");
    }

    #[test]
    fn test_blank_provider_summary_is_ignored() {
        let loc = raw(json!({ "wikipedia_extracts": { "text": "  " } }));
        assert!(loc.summary().is_none());
    }
}
