//! CSV-to-Anki vocabulary card pipeline.
//!
//! `vocard-engine` ties the [`vocard_anki`] note store client and the
//! [`vocard_gen`] card generator together into a sequential pipeline: read
//! words from a CSV file, skip the ones that already have a note, generate
//! card content for the rest, and add the results to a deck.
//!
//! # Example
//!
//! ```no_run
//! use vocard_engine::{read_words, Pipeline, RunConfig};
//! use vocard_gen::{GeminiClient, Generator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let anki = vocard_anki::AnkiClient::new();
//! let gemini = GeminiClient::builder().api_key("api-key").build();
//! let generator = Generator::new(gemini);
//!
//! let words = read_words("words.csv")?;
//! let pipeline = Pipeline::new(anki, generator, RunConfig::default());
//! let report = pipeline.run(&words).await;
//! println!("added {} notes", report.added);
//! # Ok(())
//! # }
//! ```

mod error;

pub mod config;
pub mod pipeline;
pub mod words;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use pipeline::{Pipeline, RunReport, WordFailure, WordOutcome};
pub use words::{read_words, WordEntry};

// Re-export the client types most callers need alongside the pipeline.
pub use vocard_anki::{AnkiClient, ClientBuilder, Note, NoteBuilder};
pub use vocard_gen::{GeminiClient, GenerateOptions, Generator, LexicalRecord, TextGenerator};
