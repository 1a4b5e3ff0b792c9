//! Pipeline run configuration.

use std::time::Duration;

/// Settings for a single pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Deck that notes are checked against and added to.
    pub deck: String,

    /// Anki note type (model) the notes are created with.
    pub note_type: String,

    /// When set, notes are logged instead of sent to Anki.
    pub dry_run: bool,

    /// Pause after each word that reached generation.
    pub pause: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            deck: "EnglishAI".to_string(),
            note_type: "EnglishAI".to_string(),
            dry_run: false,
            pause: Duration::from_secs(1),
        }
    }
}
