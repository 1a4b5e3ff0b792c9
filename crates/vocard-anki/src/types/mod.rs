//! Domain types for AnkiConnect.

mod note;

pub use note::{Note, NoteBuilder};
