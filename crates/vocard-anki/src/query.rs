//! Search query construction for duplicate checks.
//!
//! Anki's search syntax is stringly typed; [`NoteQuery`] builds the one
//! query shape the importer needs, a deck and note type scope plus a single
//! field filter, with every value quoted so that words containing spaces or
//! search operators match literally.

use std::fmt;

/// Builds a `deck:"…" note:"…" Field:"…"` search query.
///
/// # Example
///
/// ```
/// use vocard_anki::NoteQuery;
///
/// let query = NoteQuery::new("EnglishAI", "EnglishAI")
///     .field("Word", "resilience")
///     .build();
/// assert_eq!(query, r#"deck:"EnglishAI" note:"EnglishAI" Word:"resilience""#);
/// ```
#[derive(Debug, Clone)]
pub struct NoteQuery {
    deck: String,
    note_type: String,
    field: Option<(String, String)>,
}

impl NoteQuery {
    /// Create a query scoped to a deck and note type.
    #[must_use]
    pub fn new(deck: impl Into<String>, note_type: impl Into<String>) -> Self {
        Self {
            deck: deck.into(),
            note_type: note_type.into(),
            field: None,
        }
    }

    /// Filter on a field value. Field names are case-sensitive and must
    /// match the note type exactly.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.field = Some((name.into(), value.into()));
        self
    }

    /// Render the query string.
    pub fn build(&self) -> String {
        let mut query = format!(
            "deck:{} note:{}",
            quoted(&self.deck),
            quoted(&self.note_type)
        );
        if let Some((name, value)) = &self.field {
            query.push_str(&format!(" {}:{}", name, quoted(value)));
        }
        query
    }
}

impl fmt::Display for NoteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.build())
    }
}

/// Quote a value, escaping any embedded double quotes.
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}
