//! Paste and drop routing for media ingestion.
//!
//! Decides which payload, if any, from a paste or drop event should enter
//! the image pipeline. Only the first qualifying image is ever processed,
//! matching the single-image capture model of the editor; additional
//! payloads in the same event are deliberately ignored.

/// A paste or drop payload with a declared content type.
///
/// Implemented by whatever clipboard item or file handle the host toolkit
/// exposes; routing never reads payload bytes, only the declared type.
pub trait MediaPayload {
    /// Declared MIME type, e.g. `image/png`
    fn content_type(&self) -> &str;
}

/// Routing decision for a paste event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteAction<P> {
    /// Encode this payload and insert the resulting fragment; the host must
    /// suppress default paste handling.
    EncodeAndInsert(P),
    /// No image payload present; default paste handling proceeds untouched.
    PassThrough,
}

impl<P> PasteAction<P> {
    /// Whether the host should suppress the default paste behavior
    #[must_use]
    pub const fn suppresses_default(&self) -> bool {
        matches!(self, Self::EncodeAndInsert(_))
    }
}

/// Routing decision for a drop event. Drops always suppress default handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction<P> {
    /// Encode the first dropped file and insert the resulting fragment
    EncodeAndInsert(P),
    /// First dropped file is not an image; the drop is consumed and ignored
    Ignore,
}

/// Route a paste event: the first payload whose declared type indicates an
/// image wins; everything after it is ignored. Non-image pastes pass through.
pub fn route_paste<P: MediaPayload>(items: Vec<P>) -> PasteAction<P> {
    items
        .into_iter()
        .find(|item| is_image(item.content_type()))
        .map_or(PasteAction::PassThrough, PasteAction::EncodeAndInsert)
}

/// Route a drop event: only the first file is considered, regardless of how
/// many were dropped.
pub fn route_drop<P: MediaPayload>(files: Vec<P>) -> DropAction<P> {
    files
        .into_iter()
        .next()
        .filter(|file| is_image(file.content_type()))
        .map_or(DropAction::Ignore, DropAction::EncodeAndInsert)
}

fn is_image(content_type: &str) -> bool {
    content_type.starts_with("image/")
}
