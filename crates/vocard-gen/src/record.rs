//! The normalized result of one generation request.

use serde_json::{Map, Value};

/// Structured lexical data for one word.
///
/// All five fields are always present. See [`LexicalRecord::from_object`]
/// for how loose model output is normalized into this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalRecord {
    /// A concise English definition.
    pub meaning: String,
    /// The Portuguese translation of the word.
    pub translation: String,
    /// The Portuguese translation of the meaning.
    pub meaning_translation: String,
    /// An English example sentence using the word.
    pub example_phrase: String,
    /// The Portuguese translation of the example sentence.
    pub phrase_translation: String,
}

impl LexicalRecord {
    /// Normalize an extracted JSON object into a record.
    ///
    /// Missing keys become empty strings and string values are trimmed.
    /// A non-string value (including `null`) is kept as its compact JSON
    /// text rather than dropped.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        Self {
            meaning: field_text(object, "meaning"),
            translation: field_text(object, "translation"),
            meaning_translation: field_text(object, "meaning_translation"),
            example_phrase: field_text(object, "example_phrase"),
            phrase_translation: field_text(object, "phrase_translation"),
        }
    }
}

fn field_text(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string(),
    }
}
