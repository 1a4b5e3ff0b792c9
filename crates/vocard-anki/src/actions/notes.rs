//! Note-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use vocard_anki::{AnkiClient, NoteBuilder};
//!
//! # async fn example() -> vocard_anki::Result<()> {
//! let client = AnkiClient::new();
//!
//! let note = NoteBuilder::new("EnglishAI", "EnglishAI")
//!     .field("Word", "resilience")
//!     .field("Meaning", "The capacity to recover quickly from difficulties.")
//!     .tag("generated_by_gemini")
//!     .build();
//!
//! let note_id = client.notes().add(note).await?;
//! println!("Created note: {}", note_id);
//!
//! // Find notes matching an Anki search query.
//! let note_ids = client.notes().find(r#"deck:"EnglishAI""#).await?;
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::Note;

/// Provides access to note-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::notes()`].
#[derive(Debug)]
pub struct NoteActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct AddNoteParams {
    note: Note,
}

#[derive(Serialize)]
struct FindNotesParams<'a> {
    query: &'a str,
}

impl<'a> NoteActions<'a> {
    /// Add a new note.
    ///
    /// Returns the ID of the created note. AnkiConnect rejects notes it
    /// considers duplicates with an error message containing "duplicate".
    pub async fn add(&self, note: Note) -> Result<i64> {
        self.client.invoke("addNote", AddNoteParams { note }).await
    }

    /// Find notes matching a query in Anki's search syntax.
    ///
    /// Returns a list of note IDs; an empty list means no match. See
    /// [`NoteQuery`](crate::NoteQuery) for building field-scoped queries.
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("findNotes", FindNotesParams { query })
            .await
    }
}
