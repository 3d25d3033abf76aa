//! Application state management
//!
//! Global state accessible via Dioxus context providers. The editor state
//! machine itself lives in loam-core; this layer owns the single current
//! [`EditorState`] value, routes reducer commands to the backend, and keeps
//! the displayed note list fresh.

use std::sync::Arc;

use dioxus::prelude::*;

use loam_core::editor::{self, Command, EditorAction, EditorState};
use loam_core::{Note, NoteBackend, NoteId, QuerySequencer};

use crate::services::HttpBackend;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Notes currently displayed in the list pane
    pub notes: Signal<Vec<Note>>,
    /// The single live editor state value
    pub editor: Signal<EditorState>,
    /// Caret offset to restore after the next buffer update, if any
    pub caret_restore: Signal<Option<usize>>,
    /// Dismissible backend error notice
    pub notice: Signal<Option<String>>,
    /// HTTP backend, if it initialized successfully
    pub backend: Signal<Option<Arc<HttpBackend>>>,
    /// Monotonic tickets guarding list refreshes against stale responses
    pub sequencer: Signal<QuerySequencer>,
}

impl AppState {
    /// Run one editor action through the reducer and execute any resulting
    /// command.
    pub fn dispatch(mut self, action: EditorAction) {
        let current = self.editor.peek().clone();
        let (next, command) = editor::apply(current, action);
        self.editor.set(next);
        if let Some(command) = command {
            self.execute(command);
        }
    }

    /// Execute a reducer command.
    fn execute(mut self, command: Command) {
        match command {
            Command::MoveCaret(offset) => {
                self.caret_restore.set(Some(offset));
            }
            Command::Create {
                title,
                content,
                tags,
            } => {
                let Some(backend) = self.backend.peek().clone() else {
                    return;
                };
                spawn(async move {
                    match backend.create(&title, &content, &tags).await {
                        Ok(note) => {
                            tracing::debug!("Created note: {}", note.id);
                            self.refresh();
                        }
                        Err(error) => self.report(&error.to_string()),
                    }
                });
            }
            Command::Update {
                id,
                title,
                content,
                tags,
            } => {
                let Some(backend) = self.backend.peek().clone() else {
                    return;
                };
                spawn(async move {
                    match backend.update(&id, &title, &content, &tags).await {
                        Ok(()) => {
                            tracing::debug!("Updated note: {id}");
                            self.refresh();
                        }
                        Err(error) => self.report(&error.to_string()),
                    }
                });
            }
        }
    }

    /// Delete a note; deleting the one being edited cancels the edit.
    pub fn delete_note(self, id: NoteId) {
        let Some(backend) = self.backend.peek().clone() else {
            return;
        };
        spawn(async move {
            match backend.delete(&id).await {
                Ok(()) => {
                    tracing::debug!("Deleted note: {id}");
                    self.dispatch(EditorAction::NoteDeleted(id));
                    self.refresh();
                }
                Err(error) => self.report(&error.to_string()),
            }
        });
    }

    /// Re-fetch the note list for the current search query.
    ///
    /// Requests are never cancelled; the sequencer drops any response that
    /// resolves after a newer one has already been applied.
    pub fn refresh(mut self) {
        let query = self.editor.peek().search_query.clone();
        let Some(backend) = self.backend.peek().clone() else {
            return;
        };
        let ticket = self.sequencer.write().begin();

        spawn(async move {
            let result = if query.is_empty() {
                backend.fetch_all().await
            } else {
                backend.search(&query).await
            };
            match result {
                Ok(notes) => {
                    if self.sequencer.write().try_apply(ticket) {
                        self.notes.set(notes);
                    }
                }
                Err(error) => self.report(&error.to_string()),
            }
        });
    }

    /// Surface a backend failure as a visible, dismissible notice. Local
    /// state is never mutated speculatively, so the prior view stays intact.
    fn report(mut self, message: &str) {
        tracing::error!("{message}");
        self.notice.set(Some(message.to_string()));
    }
}
