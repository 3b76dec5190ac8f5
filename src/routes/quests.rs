// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Quest routes: location search and quest creation.

use crate::error::{AppError, Result};
use crate::models::{LocationCandidate, QuestRecord};
use crate::validation::{
    validate_quest_input, validate_search_input, CreateQuestRequest, SearchRequest,
};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Quest routes, nested under `/api/v1/quests`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search", post(search_locations))
        .route("/create", post(create_quest))
}

// ─── Search ──────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SearchResponse {
    pub locations: Vec<LocationCandidate>,
}

/// Geocode a location name and return summarized candidates.
async fn search_locations(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>> {
    let Json(request) = payload?;
    let query = validate_search_input(request.location_name.as_ref())?;

    let locations = state.resolver.resolve(&query).await?;

    Ok(Json(SearchResponse { locations }))
}

// ─── Create ──────────────────────────────────────────────────

/// Generate a quest for a selected location and optionally log it.
async fn create_quest(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateQuestRequest>, JsonRejection>,
) -> Result<Json<QuestRecord>> {
    let Json(request) = payload?;
    let input = validate_quest_input(&request)?;

    let description = state
        .descriptions
        .describe(&input.display_name, input.summary.as_deref())
        .await;

    let quest = QuestRecord::assemble(&input, description);

    if input.save_to_log {
        state.quest_log.append(&quest).await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to save quest to CSV");
            AppError::from(e)
        })?;
        tracing::info!(
            location = %input.display_name,
            path = %state.quest_log.path().display(),
            "Saved quest to log"
        );
    } else {
        tracing::info!(location = %input.display_name, "Skipped saving quest to log");
    }

    tracing::info!(
        place_id = %input.place_id,
        location = %input.display_name,
        "Created quest"
    );
    Ok(Json(quest))
}
