// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Quest Forge: turn places into quests
//!
//! This crate provides the backend API that geocodes free-text locations,
//! enriches them with encyclopedia summaries, and generates quest
//! descriptions that are appended to a CSV log.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod validation;

use config::Config;
use services::{
    DescriptionService, GeminiClient, GeocodeEndpoint, LocationIqClient, LocationResolver,
    QuestLog, WikipediaClient,
};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub resolver: LocationResolver,
    pub descriptions: DescriptionService,
    pub quest_log: QuestLog,
}

impl AppState {
    /// Wire the real provider clients from configuration.
    pub fn from_config(config: Config) -> Result<Self, reqwest::Error> {
        let autocomplete = LocationIqClient::new(
            &config.locationiq_base_url,
            config.locationiq_api_key.clone(),
            GeocodeEndpoint::Autocomplete,
            config.provider_timeout,
        )?;
        let search = LocationIqClient::new(
            &config.locationiq_base_url,
            config.locationiq_api_key.clone(),
            GeocodeEndpoint::Search,
            config.provider_timeout,
        )?;
        let wikipedia = WikipediaClient::new(&config.wikipedia_base_url, config.summary_timeout)?;
        let gemini = GeminiClient::new(
            &config.gemini_base_url,
            config.gemini_model.clone(),
            config.gemini_api_key.clone(),
            config.provider_timeout,
        )?;

        let resolver = LocationResolver::new(
            vec![Arc::new(autocomplete), Arc::new(search)],
            Arc::new(wikipedia),
            config.search_limit,
        );

        Ok(Self {
            resolver,
            descriptions: DescriptionService::new(Arc::new(gemini)),
            quest_log: QuestLog::new(&config.quest_log_path),
            config,
        })
    }
}
