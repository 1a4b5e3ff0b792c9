//! The Gemini REST backend.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::error::{Error, Result};
use crate::generate::TextGenerator;

/// Default base URL for the Gemini API.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model identifier.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default timeout for generation requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// A client for the Gemini `generateContent` endpoint.
///
/// # Example
///
/// ```no_run
/// use vocard_gen::{GeminiClient, TextGenerator};
///
/// # async fn example() -> vocard_gen::Result<()> {
/// let client = GeminiClient::builder()
///     .api_key("my-key")
///     .model("gemini-2.5-flash")
///     .build();
///
/// let text = client.generate_text("Define \"resilience\" as JSON.").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    /// Create a client with default settings and no API key.
    ///
    /// Without a key the API will reject requests; see
    /// [`GeminiClientBuilder::api_key`].
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::new()
    }

    /// The model identifier requests are sent to.
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let mut request = self.http_client.post(&url).json(&json!({
            "contents": [{"parts": [{"text": prompt}]}]
        }));
        if let Some(key) = &self.api_key {
            request = request.header("x-goog-api-key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Backend(extract_error_message(status, &body)));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::Backend(format!("unreadable response body: {}", e)))?;

        let text: String = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(Error::Backend(
                "response contained no candidate text".to_string(),
            ));
        }

        Ok(text)
    }
}

/// Pull a useful message out of an error body, falling back to the status.
///
/// The API reports errors as `{"error": {"message": "..."}}`.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        });

    match message {
        Some(message) => format!("{}: {}", status, message),
        None => status.to_string(),
    }
}

/// Builder for creating a customized [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiClientBuilder {
    base_url: String,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
}

impl GeminiClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the API base URL. Mainly useful for tests.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key sent in the `x-goog-api-key` header.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model identifier.
    ///
    /// Defaults to `gemini-2.5-flash`.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 60 seconds; generation can be slow.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> GeminiClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to build HTTP client");

        GeminiClient {
            http_client,
            base_url: self.base_url,
            api_key: self.api_key,
            model: self.model,
        }
    }
}

impl Default for GeminiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
