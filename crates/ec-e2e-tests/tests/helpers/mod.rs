//! Shared test harness for E2E integration tests.
//!
//! Loads a real CSV dataset through `ec-diagnostics` and drives the chat
//! router from `ec-chat-api` with `tower::oneshot`.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use ec_chat_api::routes::build_router;
use ec_chat_api::state::AppState;
use ec_diagnostics::ReferenceTable;

/// Path to the sample dataset shipped at the workspace root.
pub fn sample_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/engine_data.csv")
}

/// End-to-end harness: loaded state plus the router built from it.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Harness backed by `data/engine_data.csv`.
    pub fn with_sample_dataset() -> Self {
        let state = AppState::from_dataset(sample_dataset_path()).unwrap();
        Self::from_state(state)
    }

    /// Harness backed by an inline CSV document.
    pub fn from_csv(csv: &str) -> Self {
        let table = ReferenceTable::from_reader(csv.as_bytes()).unwrap();
        Self::from_state(AppState::new(table))
    }

    /// Harness with an empty reference table (rules only).
    pub fn rules_only() -> Self {
        Self::from_state(AppState::default())
    }

    fn from_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// POST /chat with `{"message": <text>}`. Returns (status, reply text).
    pub async fn chat(&self, message: &str) -> (StatusCode, String) {
        let body = serde_json::json!({ "message": message });
        self.post_chat(
            Body::from(serde_json::to_vec(&body).unwrap()),
            "application/json",
        )
        .await
    }

    /// POST /chat with an arbitrary body. Returns (status, reply text).
    pub async fn post_chat(&self, body: Body, content_type: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post("/chat")
                    .header("content-type", content_type)
                    .body(body)
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json["response"].as_str().unwrap().to_string())
    }

    /// GET a path. Returns (status, raw body).
    pub async fn get(&self, path: &str) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }
}
