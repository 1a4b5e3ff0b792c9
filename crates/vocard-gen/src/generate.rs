//! Generation driver: prompt, extraction, and bounded retry.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::{Error, Result};
use crate::extract::extract_object;
use crate::prompt::build_prompt;
use crate::record::LexicalRecord;

/// A text-generation backend.
///
/// The production implementation is [`GeminiClient`](crate::GeminiClient);
/// tests substitute scripted fakes. Implementations may use `async fn`.
pub trait TextGenerator {
    /// Send one prompt and return the model's raw text output.
    fn generate_text(&self, prompt: &str) -> impl Future<Output = Result<String>>;
}

/// Retry policy for generation requests.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Additional attempts allowed after the first failure.
    pub retries: u32,
    /// Base wait; the sleep before attempt `n + 1` is `backoff * n`.
    pub backoff: Duration,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            retries: 2,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Drives a [`TextGenerator`] backend to produce [`LexicalRecord`]s.
///
/// Any failure (transport, backend error, extraction) is retried with
/// linear backoff until the allowed attempts are spent.
#[derive(Debug)]
pub struct Generator<B> {
    backend: B,
    options: GenerateOptions,
}

impl<B: TextGenerator> Generator<B> {
    /// Create a generator with the default retry policy.
    pub fn new(backend: B) -> Self {
        Self::with_options(backend, GenerateOptions::default())
    }

    /// Create a generator with a custom retry policy.
    pub fn with_options(backend: B, options: GenerateOptions) -> Self {
        Self { backend, options }
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Generate the lexical record for one word.
    ///
    /// Makes up to `retries + 1` attempts, sleeping `backoff * attempt`
    /// between them. Exhausting the attempts returns [`Error::Exhausted`]
    /// wrapping the final failure.
    pub async fn generate(&self, word: &str) -> Result<LexicalRecord> {
        let prompt = build_prompt(word);
        let total = self.options.retries + 1;
        let mut attempt = 1;

        loop {
            match self.attempt(&prompt).await {
                Ok(record) => return Ok(record),
                Err(e) if attempt < total => {
                    let wait = self.options.backoff * attempt;
                    warn!(
                        word,
                        attempt,
                        total,
                        wait_ms = wait.as_millis() as u64,
                        error = %e,
                        "generation attempt failed, retrying"
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(Error::Exhausted {
                        attempts: total,
                        source: Box::new(e),
                    });
                }
            }
        }
    }

    async fn attempt(&self, prompt: &str) -> Result<LexicalRecord> {
        let raw = self.backend.generate_text(prompt).await?;
        let object = extract_object(&raw)?;
        Ok(LexicalRecord::from_object(&object))
    }
}
