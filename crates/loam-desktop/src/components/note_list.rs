//! Note list component

use dioxus::document;
use dioxus::prelude::*;

use loam_core::editor::EditorAction;

use super::NoteCard;
use crate::state::AppState;
use crate::theme::Palette;

/// List of notes for the current view (all notes or search results)
#[component]
pub fn NoteList() -> Element {
    let state = use_context::<AppState>();
    let notes = (state.notes)();
    let colors = Palette::DARK;

    rsx! {
        div {
            class: "note-list",
            style: "display: flex; flex-direction: column; gap: 12px;",

            if notes.is_empty() {
                p {
                    style: "color: {colors.text_muted}; opacity: 0.7;",
                    "No notes yet..."
                }
            } else {
                for note in notes {
                    {
                        let edit_target = note.clone();
                        let delete_id = note.id.clone();
                        rsx! {
                            NoteCard {
                                key: "{note.id}",
                                note: note.clone(),
                                on_edit: move |_| {
                                    state.dispatch(EditorAction::StartEdit(edit_target.clone()));
                                },
                                on_delete: move |_| {
                                    let id = delete_id.clone();
                                    spawn(async move {
                                        // Deletion is irreversible; ask first.
                                        match document::eval("return confirm('Delete this note?');").await {
                                            Ok(answer) if confirmed(&answer) => state.delete_note(id),
                                            Ok(_) => {}
                                            Err(error) => {
                                                tracing::debug!("Delete confirmation failed: {error:?}");
                                            }
                                        }
                                    });
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A delete only proceeds on an explicit yes; a missing or malformed answer
/// from the confirm dialog counts as no.
fn confirmed(answer: &serde_json::Value) -> bool {
    answer.as_bool().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_an_explicit_yes_confirms_deletion() {
        assert!(confirmed(&serde_json::Value::Bool(true)));
        assert!(!confirmed(&serde_json::Value::Bool(false)));
        assert!(!confirmed(&serde_json::Value::Null));
        assert!(!confirmed(&serde_json::json!("yes")));
    }
}
