//! Backend collaborator seam.
//!
//! Persistence, full-text search, and ID assignment belong to an external
//! backend reached through five request/response operations. The core never
//! mutates local state speculatively: a failed call leaves the prior view
//! intact, and the host surfaces the error to the user.

use crate::error::Result;
use crate::models::{Note, NoteId};

/// The external note store.
///
/// All operations are latent and fallible; failures map to
/// [`crate::Error::Backend`]. Matching and ordering semantics of `search`
/// are owned by the backend.
pub trait NoteBackend {
    /// Fetch every note; used while the search query is empty.
    fn fetch_all(&self) -> impl std::future::Future<Output = Result<Vec<Note>>> + Send;

    /// Full-text search; used while the search query is non-empty.
    fn search(&self, query: &str) -> impl std::future::Future<Output = Result<Vec<Note>>> + Send;

    /// Create a note. The backend assigns and returns the ID.
    fn create(
        &self,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> impl std::future::Future<Output = Result<Note>> + Send;

    /// Update an existing note in place.
    fn update(
        &self,
        id: &NoteId,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Delete a note.
    fn delete(&self, id: &NoteId) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Monotonic tickets for list-refresh round-trips.
///
/// Fetches and searches are never cancelled, so a slow response can arrive
/// after a newer one. Each request takes a ticket from [`Self::begin`]; a
/// response may only be applied when [`Self::try_apply`] accepts its ticket,
/// which guarantees stale results never overwrite fresher ones
/// (last-write-wins on the displayed list).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuerySequencer {
    issued: u64,
    applied: u64,
}

impl QuerySequencer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issued: 0,
            applied: 0,
        }
    }

    /// Issue the ticket for the next request.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Accept a response ticket unless a newer response was already applied.
    pub fn try_apply(&mut self, ticket: u64) -> bool {
        if ticket > self.applied {
            self.applied = ticket;
            true
        } else {
            tracing::debug!(ticket, applied = self.applied, "Dropping stale response");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_monotonic() {
        let mut seq = QuerySequencer::new();
        assert_eq!(seq.begin(), 1);
        assert_eq!(seq.begin(), 2);
        assert_eq!(seq.begin(), 3);
    }

    #[test]
    fn in_order_responses_all_apply() {
        let mut seq = QuerySequencer::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(seq.try_apply(first));
        assert!(seq.try_apply(second));
    }

    #[test]
    fn stale_response_is_dropped_after_newer_one_applied() {
        let mut seq = QuerySequencer::new();
        let slow = seq.begin();
        let fast = seq.begin();

        // The newer request resolves first; the older must not overwrite it.
        assert!(seq.try_apply(fast));
        assert!(!seq.try_apply(slow));
    }

    #[test]
    fn out_of_order_resolution_converges_to_latest() {
        let mut seq = QuerySequencer::new();
        let a = seq.begin();
        let b = seq.begin();
        let c = seq.begin();

        assert!(seq.try_apply(a));
        assert!(seq.try_apply(c));
        assert!(!seq.try_apply(b));
    }
}
