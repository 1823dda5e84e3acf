//! Server test utilities.
//!
//! Spins up a stub of the upstream marketplace API (token + search
//! endpoints) on an ephemeral port and builds the proxy router against it.

use axum::Json;
use axum::extract::{Query as QueryParams, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use upclink_core::config::AppConfig;
use upclink_server::{AppState, create_router};

/// Stub upstream API state: hit counters for asserting call volumes.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[derive(Default)]
#[allow(dead_code)]
pub struct StubUpstream {
    pub token_hits: AtomicUsize,
    pub search_hits: AtomicUsize,
}

#[allow(dead_code)]
impl StubUpstream {
    pub fn token_calls(&self) -> usize {
        self.token_hits.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_hits.load(Ordering::SeqCst)
    }
}

async fn stub_token(State(stub): State<Arc<StubUpstream>>) -> Json<Value> {
    stub.token_hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({"access_token": "stub-token", "expires_in": 7200}))
}

async fn stub_token_denied() -> impl IntoResponse {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": "invalid_client"})),
    )
}

/// Search stub: `boom` fails with an upstream error body, `012345678905`
/// returns the canonical Widget payload, anything else echoes its query.
async fn stub_search(
    State(stub): State<Arc<StubUpstream>>,
    QueryParams(params): QueryParams<HashMap<String, String>>,
) -> impl IntoResponse {
    stub.search_hits.fetch_add(1, Ordering::SeqCst);
    let q = params.get("q").cloned().unwrap_or_default();
    match q.as_str() {
        "boom" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"errors": [{"errorId": 1001, "message": "search blew up"}]})),
        )
            .into_response(),
        "012345678905" => Json(json!({"itemSummaries": [{"title": "Widget"}]})).into_response(),
        _ => Json(json!({"itemSummaries": [{"title": format!("Item {q}")}]})).into_response(),
    }
}

/// A test server wrapper with its stub upstream and staging directory.
#[allow(dead_code)]
pub struct TestServer {
    pub router: axum::Router,
    pub upstream: Arc<StubUpstream>,
    upload_dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl TestServer {
    /// Create a test server with a healthy stub upstream.
    pub async fn new() -> Self {
        Self::build(false).await
    }

    /// Create a test server whose token exchange always fails.
    pub async fn with_broken_auth() -> Self {
        Self::build(true).await
    }

    /// Count the files currently staged in the upload directory.
    pub fn staged_files(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path())
            .expect("Failed to read upload dir")
            .count()
    }

    async fn build(broken_auth: bool) -> Self {
        let upstream = Arc::new(StubUpstream::default());
        let stub_app = axum::Router::new()
            .route("/identity/v1/oauth2/token", post(stub_token))
            .route("/identity/denied", post(stub_token_denied))
            .route("/buy/browse/v1/item_summary/search", get(stub_search))
            .with_state(upstream.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, stub_app).await.unwrap();
        });

        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");

        let mut config = AppConfig::for_testing();
        config.server.upload_dir = Some(upload_dir.path().to_path_buf());
        config.upstream.token_url = if broken_auth {
            format!("http://{addr}/identity/denied")
        } else {
            format!("http://{addr}/identity/v1/oauth2/token")
        };
        config.upstream.search_url = format!("http://{addr}/buy/browse/v1/item_summary/search");

        let state = AppState::new(config);
        let router = create_router(state);

        Self {
            router,
            upstream,
            upload_dir,
        }
    }
}
