use std::sync::Arc;

use imagist::application::routes::app_router;
use imagist::application::state::AppState;
use imagist::infrastructure::workers_ai::WorkersAiGenerator;
use tokio::net::TcpListener;
use tokio::task::AbortHandle;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Base64 of a 1x1 PNG; decodes to bytes starting with the PNG signature.
pub const PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

pub const TEST_ACCOUNT: &str = "test-account";
pub const TEST_MODEL: &str = "@cf/black-forest-labs/flux-1-schnell";

pub struct TestApp {
    pub address: String,
    pub mock_server: MockServer,
    server_handle: AbortHandle,
}

impl TestApp {
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Path the mock upstream expects generation calls on.
    pub fn run_path(&self) -> String {
        format!("/accounts/{TEST_ACCOUNT}/ai/run/{TEST_MODEL}")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

/// Spawn the app on an ephemeral port, wired to a fresh wiremock upstream.
/// Requests the upstream does not match return 404, which the app surfaces
/// as a generation failure.
pub async fn spawn_app() -> TestApp {
    let mock_server = MockServer::start().await;

    let generator = WorkersAiGenerator::new(
        &mock_server.uri(),
        TEST_ACCOUNT,
        "test-token".to_string(),
        TEST_MODEL,
    )
    .expect("Failed to build Workers AI client");

    let state = AppState::new(Arc::new(generator));
    let app = app_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");

    let local_addr = listener.local_addr().expect("Failed to get local address");
    let address = format!("http://{local_addr}");

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    })
    .abort_handle();

    TestApp {
        address,
        mock_server,
        server_handle,
    }
}

pub fn generation_response(image_b64: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": { "image": image_b64 },
        "success": true,
        "errors": [],
        "messages": []
    }))
}

/// Mount a mock answering generation calls whose prompt equals `prompt`.
pub async fn mock_generation_success(app: &TestApp, prompt: &str, image_b64: &str) {
    Mock::given(method("POST"))
        .and(path(app.run_path()))
        .and(body_partial_json(serde_json::json!({ "prompt": prompt })))
        .respond_with(generation_response(image_b64))
        .mount(&app.mock_server)
        .await;
}

/// Mount a catch-all mock answering every generation call with `response`.
pub async fn mock_generation_any(app: &TestApp, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(app.run_path()))
        .respond_with(response)
        .mount(&app.mock_server)
        .await;
}

/// Asserts that the body contains full HTML page structure
pub fn assert_full_page(body: &str) {
    assert!(
        body.contains("<!DOCTYPE") || body.contains("<html"),
        "Expected full HTML page with DOCTYPE or <html> tag"
    );
}
