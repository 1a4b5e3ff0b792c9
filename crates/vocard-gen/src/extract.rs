//! Robust extraction of a JSON object from model output.
//!
//! Models asked for "ONLY a single JSON object" still wrap it in prose or
//! code fences often enough that a plain parse is not good enough.
//! Extraction tries three increasingly forgiving strategies and returns
//! the first object that parses.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Locate and parse a single JSON object in `text`.
///
/// Strategies, in order:
/// 1. parse the entire trimmed text, accepted only if it is an object
/// 2. scan left to right for balanced `{...}` spans and parse each
/// 3. parse every non-nested `{...}` span found by pattern match
///
/// Fails with [`Error::Parse`] carrying the full text when nothing parses.
pub fn extract_object(text: &str) -> Result<Map<String, Value>> {
    let text = text.trim();

    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(text) {
        return Ok(object);
    }

    if let Some(object) = scan_balanced(text) {
        return Ok(object);
    }

    let pattern = regex_lite::Regex::new(r"\{[^{}]+\}").unwrap();
    for candidate in pattern.find_iter(text) {
        if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(candidate.as_str()) {
            return Ok(object);
        }
    }

    Err(Error::Parse {
        raw: text.to_string(),
    })
}

/// Scan for balanced brace spans and parse each candidate.
///
/// Depth counting is textual: braces inside string literals count too. A
/// candidate that fails to parse resets the scan state and the search
/// continues after it.
fn scan_balanced(text: &str) -> Option<Map<String, Value>> {
    let mut start: Option<usize> = None;
    let mut depth = 0u32;

    for (i, ch) in text.char_indices() {
        match ch {
            '{' => {
                if start.is_none() {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' => {
                if depth > 0 {
                    depth -= 1;
                }
                if depth == 0 {
                    if let Some(s) = start {
                        let candidate = &text[s..=i];
                        if let Ok(Value::Object(object)) =
                            serde_json::from_str::<Value>(candidate)
                        {
                            return Some(object);
                        }
                        start = None;
                    }
                }
            }
            _ => {}
        }
    }

    None
}
