use std::path::PathBuf;

use serde_json::{json, Value};
use stovetop_core::{config::FileConfig, ConfigLoader, Kitchen, KitchenBuilder};
use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

/// Path to the shared recipe fixture.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/recipes.json")
}

/// A Gemini reply whose only text part is `plan` serialized as JSON.
pub fn gemini_reply(plan: &Value) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": plan.to_string() }] },
            "finishReason": "STOP"
        }]
    })
}

/// Starts a mock generative service that answers every request with `plan`.
pub async fn mock_gemini(plan: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(&plan)))
        .mount(&server)
        .await;
    server
}

/// Builds a kitchen over the recipe fixture, generating against `server`.
pub async fn create_test_kitchen(server: &MockServer) -> Kitchen {
    let base_url = server.uri();
    let config = ConfigLoader::new()
        .with_recipes_file(Some(fixture_path()))
        .resolve(FileConfig::default(), move |key| match key {
            "GEMINI_API_KEY" => Some("test-key".to_string()),
            "GEMINI_BASE_URL" => Some(base_url.clone()),
            _ => None,
        })
        .expect("Failed to resolve config");

    KitchenBuilder::new()
        .with_config(config)
        .build()
        .await
        .expect("Failed to create kitchen")
}
