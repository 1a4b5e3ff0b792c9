//! Common test utilities for vocard-engine pipeline tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use vocard_anki::AnkiClient;
use vocard_gen::TextGenerator;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate, Times};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create an AnkiClient connected to the mock server.
pub fn anki_for_mock(server: &MockServer) -> AnkiClient {
    AnkiClient::builder().url(server.uri()).build()
}

/// Create a successful AnkiConnect response.
pub fn mock_anki_response<T: Serialize>(result: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": result,
        "error": null
    }))
}

/// Create an error AnkiConnect response.
#[allow(dead_code)]
pub fn mock_anki_error(error: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": null,
        "error": error
    }))
}

/// Mount a mock for a specific action (expect exactly 1 call).
#[allow(dead_code)]
pub async fn mock_action(server: &MockServer, action: &str, response: ResponseTemplate) {
    mock_action_times(server, action, response, 1).await;
}

/// Mount a mock for a specific action with expected call count.
pub async fn mock_action_times(
    server: &MockServer,
    action: &str,
    response: ResponseTemplate,
    times: u64,
) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": action,
            "version": 6
        })))
        .respond_with(response)
        .expect(Times::from(times))
        .mount(server)
        .await;
}

/// A complete, well-formed model response for one word.
#[allow(dead_code)]
pub const VALID_JSON: &str = r#"{
    "meaning": "Able to recover quickly from difficulty.",
    "translation": "resiliente",
    "meaning_translation": "Capaz de se recuperar rapidamente.",
    "example_phrase": "She stayed resilient through the move.",
    "phrase_translation": "Ela permaneceu resiliente durante a mudanca."
}"#;

/// A generation backend that replays a fixed script of responses.
///
/// Cloning shares the script and the call log, so a test can keep a handle
/// while the pipeline owns another.
#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Arc<FakeBackendState>,
}

#[derive(Default)]
struct FakeBackendState {
    script: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn scripted(script: impl IntoIterator<Item = Result<String, String>>) -> Self {
        Self {
            inner: Arc::new(FakeBackendState {
                script: Mutex::new(script.into_iter().collect()),
                prompts: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn call_count(&self) -> usize {
        self.inner.prompts.lock().unwrap().len()
    }

    #[allow(dead_code)]
    pub fn prompts(&self) -> Vec<String> {
        self.inner.prompts.lock().unwrap().clone()
    }
}

impl TextGenerator for FakeBackend {
    async fn generate_text(&self, prompt: &str) -> vocard_gen::Result<String> {
        self.inner.prompts.lock().unwrap().push(prompt.to_string());
        let next = self.inner.script.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(vocard_gen::Error::Backend(message)),
            None => Err(vocard_gen::Error::Backend("script exhausted".to_string())),
        }
    }
}
