// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - provider clients and business logic.

pub mod description;
pub mod gemini;
pub mod geocode;
pub mod locationiq;
pub mod provider;
pub mod quest_log;
pub mod wikipedia;

pub use description::DescriptionService;
pub use gemini::GeminiClient;
pub use geocode::LocationResolver;
pub use locationiq::{GeocodeEndpoint, LocationIqClient};
pub use provider::{Api, GeocodeProvider, ProviderError, SummaryProvider, TextGenerator};
pub use quest_log::{QuestLog, QuestLogError};
pub use wikipedia::WikipediaClient;
