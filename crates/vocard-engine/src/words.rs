//! CSV word list ingestion.

use std::path::Path;

use crate::error::Result;

/// One input word together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// The trimmed word text.
    pub word: String,

    /// 1-based line of the CSV file the word was read from.
    pub row: u64,
}

/// Read a word list from a headerless CSV file.
///
/// The first column of each record is the word; any further columns are
/// ignored, and records may have differing field counts. Records whose
/// first column is empty or whitespace-only are dropped silently. Line
/// numbers count every line of the file, so blank lines between records
/// still advance the `row` of the entries that follow them.
pub fn read_words(path: impl AsRef<Path>) -> Result<Vec<WordEntry>> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(csv::Error::from)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = record
            .position()
            .map_or(0, |p| p.line() + skipped_blank_lines(&contents, p.byte()));
        let word = record.get(0).map(str::trim).unwrap_or_default();
        if word.is_empty() {
            continue;
        }
        entries.push(WordEntry {
            word: word.to_string(),
            row,
        });
    }

    Ok(entries)
}

/// Blank lines the reader consumed silently at the start of a record read.
///
/// A record's recorded position is where its read began, and the reader
/// swallows empty lines within that same read, so the recorded line number
/// can point at a blank line above the record. A record never starts with a
/// line terminator, so the run of `\r`/`\n` bytes at the read position is
/// exactly the blank lines that were skipped.
fn skipped_blank_lines(contents: &str, byte: u64) -> u64 {
    contents.as_bytes()[byte as usize..]
        .iter()
        .take_while(|&&b| b == b'\r' || b == b'\n')
        .filter(|&&b| b == b'\n')
        .count() as u64
}
