// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use quest_forge::config::Config;
use quest_forge::routes::create_router;
use quest_forge::services::provider::ProviderResponse;
use quest_forge::services::{
    Api, DescriptionService, GeocodeProvider, LocationResolver, ProviderError, QuestLog,
    SummaryProvider, TextGenerator,
};
use quest_forge::AppState;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// Geocoder returning a canned result and recording every query.
pub struct StubGeocoder {
    name: &'static str,
    result: Result<ProviderResponse, ProviderError>,
    pub queries: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl StubGeocoder {
    pub fn ok(name: &'static str, body: Value) -> Arc<Self> {
        Arc::new(Self {
            name,
            result: Ok(ProviderResponse { status: 200, body }),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn err(name: &'static str, error: ProviderError) -> Arc<Self> {
        Arc::new(Self {
            name,
            result: Err(error),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeocodeProvider for StubGeocoder {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn geocode(&self, query: &str, _limit: u32) -> Result<ProviderResponse, ProviderError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.result.clone()
    }
}

/// Encyclopedia with per-title answers and optional per-title delays.
/// Unknown titles fail with "not found".
#[derive(Default)]
pub struct StubEncyclopedia {
    answers: HashMap<String, Result<String, ProviderError>>,
    delays: HashMap<String, Duration>,
}

#[allow(dead_code)]
impl StubEncyclopedia {
    pub fn with(mut self, title: &str, summary: &str) -> Self {
        self.answers
            .insert(title.to_string(), Ok(summary.to_string()));
        self
    }

    pub fn failing(mut self, title: &str, error: ProviderError) -> Self {
        self.answers.insert(title.to_string(), Err(error));
        self
    }

    pub fn delayed(mut self, title: &str, delay: Duration) -> Self {
        self.delays.insert(title.to_string(), delay);
        self
    }
}

#[async_trait]
impl SummaryProvider for StubEncyclopedia {
    async fn summary(&self, title: &str) -> Result<String, ProviderError> {
        if let Some(delay) = self.delays.get(title) {
            tokio::time::sleep(*delay).await;
        }
        self.answers.get(title).cloned().unwrap_or_else(|| {
            Err(ProviderError::NotFound {
                api: Api::Wikipedia,
                status: 404,
                body: json!({ "title": "Not found." }),
            })
        })
    }
}

/// Text generator returning a canned result and recording prompts.
pub struct StubGenerator {
    result: Result<String, ProviderError>,
    pub prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl StubGenerator {
    pub fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn err(error: ProviderError) -> Arc<Self> {
        Arc::new(Self {
            result: Err(error),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.result.clone()
    }
}

/// Router plus the state and temp dir backing it.
#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
    pub state: Arc<AppState>,
    _dir: tempfile::TempDir,
}

/// Create a test app with stub providers and a temporary quest log.
#[allow(dead_code)]
pub fn create_test_app(
    attempts: Vec<Arc<dyn GeocodeProvider>>,
    encyclopedia: Arc<dyn SummaryProvider>,
    generator: Arc<dyn TextGenerator>,
) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut config = Config::test_default();
    config.quest_log_path = dir.path().join("quests.csv");
    config.static_dir = dir.path().join("public");

    let state = Arc::new(AppState {
        resolver: LocationResolver::new(attempts, encyclopedia, config.search_limit),
        descriptions: DescriptionService::new(generator),
        quest_log: QuestLog::new(&config.quest_log_path),
        config,
    });

    TestApp {
        router: create_router(state.clone()),
        state,
        _dir: dir,
    }
}

/// Test app whose search side is unused.
#[allow(dead_code)]
pub fn create_quest_app(generator: Arc<dyn TextGenerator>) -> TestApp {
    create_test_app(
        vec![StubGeocoder::ok("autocomplete", json!([]))],
        Arc::new(StubEncyclopedia::default()),
        generator,
    )
}

/// POST a JSON body and return status plus parsed JSON response.
#[allow(dead_code)]
pub async fn post_json(router: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(router, uri, body.to_string()).await
}

/// POST a raw body labelled as JSON.
pub async fn post_raw(router: &axum::Router, uri: &str, body: String) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
