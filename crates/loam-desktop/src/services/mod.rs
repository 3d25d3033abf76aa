//! Application services
//!
//! The HTTP client behind the note backend seam.

mod backend;

pub use backend::HttpBackend;
