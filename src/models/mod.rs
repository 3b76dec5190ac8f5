// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod location;
pub mod quest;

pub use location::{LocationCandidate, RawLocation, SummaryExtract, NO_SUMMARY};
pub use quest::{QuestRecord, DEFAULT_AURA, DEFAULT_CATEGORY};
