//! Structured lexical data generation for vocabulary words.
//!
//! Given an English word, this crate asks a text-generation backend for a
//! JSON object with five fields (meaning, translation, meaning translation,
//! example phrase, phrase translation), extracts that object from whatever
//! prose the model wrapped it in, and normalizes it into a [`LexicalRecord`].
//!
//! The backend sits behind the [`TextGenerator`] trait so tests can swap the
//! real [`GeminiClient`] for a scripted fake. [`Generator`] adds bounded
//! retry with linear backoff on top of any backend.
//!
//! # Example
//!
//! ```no_run
//! use vocard_gen::{GeminiClient, Generator};
//!
//! # async fn example() -> vocard_gen::Result<()> {
//! let backend = GeminiClient::builder().api_key("my-key").build();
//! let generator = Generator::new(backend);
//!
//! let record = generator.generate("resilience").await?;
//! println!("{} = {}", record.meaning, record.translation);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod extract;
pub mod gemini;
pub mod generate;
pub mod prompt;
pub mod record;

pub use error::{Error, Result};
pub use gemini::{GeminiClient, GeminiClientBuilder};
pub use generate::{GenerateOptions, Generator, TextGenerator};
pub use record::LexicalRecord;
