//! An async Rust client for the AnkiConnect HTTP API, scoped to the
//! operations a vocabulary importer needs: adding notes, finding notes,
//! and checking that AnkiConnect is reachable.
//!
//! # Quick Start
//!
//! ```no_run
//! use vocard_anki::{AnkiClient, NoteBuilder};
//!
//! # async fn example() -> vocard_anki::Result<()> {
//! // Connects to http://localhost:8765 with a 10 second timeout.
//! let client = AnkiClient::new();
//!
//! // Check that AnkiConnect is running.
//! let version = client.misc().version().await?;
//! println!("AnkiConnect version: {}", version);
//!
//! let note = NoteBuilder::new("EnglishAI", "EnglishAI")
//!     .field("Word", "resilience")
//!     .tag("generated_by_gemini")
//!     .build();
//! let note_id = client.notes().add(note).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```no_run
//! use std::time::Duration;
//! use vocard_anki::AnkiClient;
//!
//! let client = AnkiClient::builder()
//!     .url("http://localhost:8765")
//!     .api_key("your-api-key")
//!     .timeout(Duration::from_secs(30))
//!     .build();
//! ```
//!
//! # Requirements
//!
//! Anki must be running with the AnkiConnect add-on installed. By default
//! the client connects to `http://localhost:8765`.

pub mod actions;
pub mod client;
pub mod error;
pub mod query;
mod request;
pub mod types;

pub use client::{AnkiClient, ClientBuilder};
pub use error::{Error, Result};
pub use query::NoteQuery;
pub use types::{Note, NoteBuilder};
