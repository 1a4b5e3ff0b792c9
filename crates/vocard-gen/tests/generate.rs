//! Tests for generation retry behavior.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use vocard_gen::{Error, GenerateOptions, Generator, TextGenerator};

const VALID_JSON: &str = r#"{
    "meaning": "Able to float.",
    "translation": "flutuante",
    "meaning_translation": "Capaz de flutuar.",
    "example_phrase": "The buoyant raft drifted along.",
    "phrase_translation": "A jangada flutuante seguiu a deriva."
}"#;

/// A backend that replays a fixed script of responses and records each call.
struct ScriptedBackend {
    script: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
    calls: Mutex<Vec<Instant>>,
}

impl ScriptedBackend {
    fn new(script: impl IntoIterator<Item = Result<String, String>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().clone()
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl TextGenerator for ScriptedBackend {
    async fn generate_text(&self, prompt: &str) -> vocard_gen::Result<String> {
        self.calls.lock().unwrap().push(Instant::now());
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(Error::Backend(message)),
            None => Err(Error::Backend("script exhausted".to_string())),
        }
    }
}

fn fast_options(retries: u32) -> GenerateOptions {
    GenerateOptions {
        retries,
        backoff: Duration::from_millis(5),
    }
}

#[tokio::test]
async fn first_attempt_success_makes_one_call() {
    let backend = ScriptedBackend::new([Ok(VALID_JSON.to_string())]);
    let generator = Generator::new(backend);

    let record = generator.generate("buoyant").await.unwrap();

    assert_eq!(record.translation, "flutuante");
    assert_eq!(generator.backend().call_count(), 1);
}

#[tokio::test]
async fn prompt_embeds_the_word() {
    let backend = ScriptedBackend::new([Ok(VALID_JSON.to_string())]);
    let generator = Generator::new(backend);

    generator.generate("buoyant").await.unwrap();

    let prompts = generator.backend().prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("For the English word: \"buoyant\""));
}

#[tokio::test]
async fn transport_failure_is_retried() {
    let backend = ScriptedBackend::new([
        Err("connection reset".to_string()),
        Ok(VALID_JSON.to_string()),
    ]);
    let generator = Generator::with_options(backend, fast_options(2));

    let record = generator.generate("buoyant").await.unwrap();

    assert_eq!(record.meaning, "Able to float.");
    assert_eq!(generator.backend().call_count(), 2);
}

#[tokio::test]
async fn malformed_output_is_retried() {
    let backend = ScriptedBackend::new([
        Ok("I cannot produce JSON for that word.".to_string()),
        Ok(VALID_JSON.to_string()),
    ]);
    let generator = Generator::with_options(backend, fast_options(2));

    let record = generator.generate("buoyant").await.unwrap();

    assert_eq!(record.example_phrase, "The buoyant raft drifted along.");
    assert_eq!(generator.backend().call_count(), 2);
}

#[tokio::test]
async fn exhaustion_makes_exactly_retries_plus_one_attempts() {
    let backend = ScriptedBackend::new([
        Err("one".to_string()),
        Err("two".to_string()),
        Err("three".to_string()),
    ]);
    let generator = Generator::with_options(backend, fast_options(2));

    let err = generator.generate("buoyant").await.unwrap_err();

    match err {
        Error::Exhausted { attempts, source } => {
            assert_eq!(attempts, 3);
            assert!(source.to_string().contains("three"));
        }
        other => panic!("expected exhaustion, got: {}", other),
    }
    assert_eq!(generator.backend().call_count(), 3);
}

#[tokio::test]
async fn zero_retries_means_a_single_attempt() {
    let backend = ScriptedBackend::new([Err("boom".to_string())]);
    let generator = Generator::with_options(backend, fast_options(0));

    let started = Instant::now();
    let err = generator.generate("buoyant").await.unwrap_err();

    assert!(matches!(err, Error::Exhausted { attempts: 1, .. }));
    assert_eq!(generator.backend().call_count(), 1);
    // No backoff sleep after the only attempt.
    assert!(started.elapsed() < Duration::from_millis(500));
}

#[tokio::test]
async fn backoff_waits_grow_linearly() {
    let backend = ScriptedBackend::new([
        Err("one".to_string()),
        Err("two".to_string()),
        Err("three".to_string()),
    ]);
    let options = GenerateOptions {
        retries: 2,
        backoff: Duration::from_millis(20),
    };
    let generator = Generator::with_options(backend, options);

    generator.generate("buoyant").await.unwrap_err();

    let times = generator.backend().call_times();
    assert_eq!(times.len(), 3);
    let first_wait = times[1] - times[0];
    let second_wait = times[2] - times[1];
    assert!(first_wait >= Duration::from_millis(20));
    assert!(second_wait >= Duration::from_millis(40));
}
