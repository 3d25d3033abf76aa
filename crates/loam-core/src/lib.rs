//! loam-core - Core library for Loam
//!
//! This crate contains the editor state machine, the client-side media
//! ingestion pipeline, and the backend collaborator seam shared by all
//! Loam frontends. Persistence and full-text search live behind the
//! [`backend::NoteBackend`] trait; this crate never talks to the network
//! itself.

pub mod backend;
pub mod capture;
pub mod editor;
pub mod error;
pub mod media;
pub mod models;
pub mod splice;

pub use backend::{NoteBackend, QuerySequencer};
pub use error::{Error, Result};
pub use models::{Note, NoteId};
