//! Data models for Loam

mod note;

pub use note::{parse_tags, Note, NoteId};
