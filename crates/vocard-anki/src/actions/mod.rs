//! Action modules for AnkiConnect operations.
//!
//! Each module provides a set of related operations grouped by domain.

mod miscellaneous;
mod notes;

pub use miscellaneous::MiscActions;
pub use notes::NoteActions;
