//! Error types for pipeline operations.

use std::fmt;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the pipeline.
#[derive(Debug)]
pub enum Error {
    /// An error from the AnkiConnect client.
    NoteStore(vocard_anki::Error),

    /// An error from the card generator.
    Generation(vocard_gen::Error),

    /// The input CSV could not be read.
    Csv(csv::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NoteStore(e) => Some(e),
            Error::Generation(e) => Some(e),
            Error::Csv(e) => Some(e),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoteStore(e) => write!(f, "note store error: {}", e),
            Error::Generation(e) => write!(f, "generation error: {}", e),
            Error::Csv(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl From<vocard_anki::Error> for Error {
    fn from(e: vocard_anki::Error) -> Self {
        Error::NoteStore(e)
    }
}

impl From<vocard_gen::Error> for Error {
    fn from(e: vocard_gen::Error) -> Self {
        Error::Generation(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::Csv(e)
    }
}
