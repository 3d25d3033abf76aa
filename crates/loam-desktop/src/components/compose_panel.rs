//! Compose panel component
//!
//! The note form: title, Markdown content, and tags, bound to the core
//! editor state machine. Dropping an image onto the content area runs it
//! through the media pipeline and splices the resulting fragment into the
//! buffer at the selection live at splice time.

use dioxus::document;
use dioxus::html::HasFileData;
use dioxus::prelude::*;

use loam_core::capture::{route_drop, DropAction, MediaPayload};
use loam_core::editor::EditorAction;
use loam_core::media;
use loam_core::splice::SelectionRange;

use crate::state::AppState;
use crate::theme::Palette;

/// DOM id of the content textarea, used for selection and caret scripts
const CONTENT_AREA_ID: &str = "compose-content";

/// A dropped file reduced to its declared content type for routing
struct DropCandidate {
    content_type: String,
}

impl MediaPayload for DropCandidate {
    fn content_type(&self) -> &str {
        &self.content_type
    }
}

/// The note compose form with inline image capture
#[component]
pub fn ComposePanel() -> Element {
    let state = use_context::<AppState>();
    let editor = (state.editor)();
    let editing = editor.editing_existing();
    let mut drag_over = use_signal(|| false);
    let colors = Palette::DARK;

    // Caret restoration is deferred: the buffer update renders first, then
    // focus and cursor move to just after the inserted fragment.
    use_effect(move || {
        let Some(caret) = (state.caret_restore)() else {
            return;
        };
        let mut restore = state.caret_restore;
        let content = state.editor.peek().content.clone();
        let position = byte_to_utf16_offset(&content, caret);
        spawn(async move {
            let script = format!(
                "const t = document.getElementById('{CONTENT_AREA_ID}'); \
                 if (t) {{ t.focus(); t.selectionStart = t.selectionEnd = {position}; }}"
            );
            if let Err(error) = document::eval(&script).await {
                tracing::debug!("Caret restore failed: {error:?}");
            }
            restore.set(None);
        });
    });

    let on_drop = move |evt: Event<DragData>| {
        // Drops are always consumed, image or not.
        evt.prevent_default();
        drag_over.set(false);

        let mut files = evt.files();
        if files.is_empty() {
            return;
        }
        // Only the first dropped file is ever considered.
        let file = files.remove(0);
        let candidate = DropCandidate {
            content_type: declared_content_type(file.content_type().as_deref(), &file.name()),
        };

        let DropAction::EncodeAndInsert(_) = route_drop(vec![candidate]) else {
            tracing::debug!("Ignoring non-image drop");
            return;
        };

        spawn(async move {
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes,
                Err(error) => {
                    tracing::warn!("Failed to read dropped file: {error}");
                    return;
                }
            };

            // Decode failures drop the capture silently; the user just sees
            // no image appear.
            let encoded = match media::encode_image(bytes.as_ref()) {
                Ok(encoded) => encoded,
                Err(error) => {
                    tracing::warn!("Dropped image not embeddable: {error}");
                    return;
                }
            };

            // The buffer may have changed while encoding ran; splice against
            // the selection that is live now, not the one at drop time.
            let content = state.editor.peek().content.clone();
            let selection = live_selection(&content).await;
            state.dispatch(EditorAction::InsertFragment {
                selection,
                fragment: encoded.fragment(),
            });
        });
    };

    let border_color = if drag_over() {
        colors.accent
    } else {
        colors.border
    };
    let heading_color = if editing {
        colors.accent
    } else {
        colors.text_muted
    };
    let heading = if editing { "Editing" } else { "New note" };

    rsx! {
        div {
            class: if editing { "compose-panel edit-mode" } else { "compose-panel" },
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 16px;
                border: 1px dashed {border_color};
                border-radius: 8px;
                background: {colors.bg_secondary};
            ",
            ondragover: move |evt| {
                evt.prevent_default();
                drag_over.set(true);
            },
            ondragleave: move |_| drag_over.set(false),
            ondrop: on_drop,

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",

                h3 {
                    style: "margin: 0; color: {heading_color};",
                    "{heading}"
                }

                if editing {
                    button {
                        onclick: move |_| state.dispatch(EditorAction::CancelCompose),
                        style: "
                            background: transparent;
                            border: none;
                            color: {colors.text_muted};
                            cursor: pointer;
                        ",
                        "Cancel"
                    }
                }
            }

            input {
                placeholder: "Title...",
                value: "{editor.title}",
                oninput: move |evt| state.dispatch(EditorAction::SetTitle(evt.value())),
                style: "
                    padding: 8px 10px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }

            textarea {
                id: CONTENT_AREA_ID,
                placeholder: "Write Markdown or drop images here...",
                rows: 8,
                value: "{editor.content}",
                oninput: move |evt| state.dispatch(EditorAction::SetContent(evt.value())),
                style: "
                    min-height: 150px;
                    padding: 8px 10px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    resize: vertical;
                    font-family: inherit;
                    line-height: 1.6;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }

            input {
                placeholder: "Tags, comma separated...",
                value: "{editor.tags_raw}",
                oninput: move |evt| state.dispatch(EditorAction::SetTagsRaw(evt.value())),
                style: "
                    padding: 8px 10px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    background: {colors.bg_primary};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }

            button {
                class: "btn-save",
                onclick: move |_| state.dispatch(EditorAction::Save),
                style: "
                    align-self: flex-start;
                    padding: 8px 16px;
                    border: none;
                    border-radius: 6px;
                    background: {colors.accent};
                    color: {colors.bg_primary};
                    font-weight: 600;
                    cursor: pointer;
                ",
                if editing { "Update" } else { "Save" }
            }
        }
    }
}

/// Declared content type of a dropped file, falling back to a guess from the
/// file name when the toolkit reports none or a generic octet stream.
fn declared_content_type(content_type: Option<&str>, file_name: &str) -> String {
    if let Some(content_type) = content_type {
        let trimmed = content_type.trim();
        if !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("application/octet-stream") {
            return trimmed.to_string();
        }
    }

    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Read the textarea's current selection, mapped to byte offsets into
/// `content`. Falls back to a caret at buffer end when the widget is gone
/// or the script fails.
async fn live_selection(content: &str) -> SelectionRange {
    let script = format!(
        "const t = document.getElementById('{CONTENT_AREA_ID}'); \
         return t ? [t.selectionStart, t.selectionEnd] : null;"
    );
    let fallback = SelectionRange::caret(content.len());

    match document::eval(&script).await {
        Ok(value) => parse_selection(&value, content).unwrap_or(fallback),
        Err(error) => {
            tracing::debug!("Selection query failed: {error:?}");
            fallback
        }
    }
}

fn parse_selection(value: &serde_json::Value, content: &str) -> Option<SelectionRange> {
    let pair = value.as_array()?;
    let start = usize::try_from(pair.first()?.as_u64()?).ok()?;
    let end = usize::try_from(pair.get(1)?.as_u64()?).ok()?;
    Some(SelectionRange {
        start: utf16_to_byte_offset(content, start),
        end: utf16_to_byte_offset(content, end),
    })
}

/// Map a UTF-16 code unit index (what the DOM reports) to a byte offset.
fn utf16_to_byte_offset(text: &str, utf16_index: usize) -> usize {
    let mut units = 0;
    for (byte_index, ch) in text.char_indices() {
        if units >= utf16_index {
            return byte_index;
        }
        units += ch.len_utf16();
    }
    text.len()
}

/// Map a byte offset on a character boundary to a UTF-16 code unit index.
fn byte_to_utf16_offset(text: &str, byte_index: usize) -> usize {
    text.get(..byte_index)
        .unwrap_or(text)
        .chars()
        .map(char::len_utf16)
        .sum()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn declared_content_type_prefers_the_report_over_the_name() {
        assert_eq!(
            declared_content_type(Some("image/gif"), "x.bin"),
            "image/gif"
        );
        assert_eq!(
            declared_content_type(Some("application/octet-stream"), "photo.png"),
            "image/png"
        );
        assert_eq!(declared_content_type(None, "photo.jpg"), "image/jpeg");
        assert_eq!(
            declared_content_type(None, "unknown.bin"),
            "application/octet-stream"
        );
    }

    #[test]
    fn offset_mapping_is_identity_for_ascii() {
        assert_eq!(utf16_to_byte_offset("hello", 3), 3);
        assert_eq!(byte_to_utf16_offset("hello", 3), 3);
    }

    #[test]
    fn offset_mapping_handles_multibyte_text() {
        // "é" is 2 bytes in UTF-8 but a single UTF-16 unit.
        let text = "héllo";
        assert_eq!(utf16_to_byte_offset(text, 2), 3);
        assert_eq!(byte_to_utf16_offset(text, 3), 2);

        // Emoji outside the BMP: 4 bytes, 2 UTF-16 units.
        let emoji = "a🦀b";
        assert_eq!(utf16_to_byte_offset(emoji, 3), 5);
        assert_eq!(byte_to_utf16_offset(emoji, 5), 3);
    }

    #[test]
    fn offset_mapping_clamps_past_the_end() {
        assert_eq!(utf16_to_byte_offset("ab", 10), 2);
        assert_eq!(byte_to_utf16_offset("ab", 10), 2);
    }

    #[test]
    fn parse_selection_reads_the_dom_pair() {
        let value = serde_json::json!([2, 4]);
        assert_eq!(
            parse_selection(&value, "hello"),
            Some(SelectionRange { start: 2, end: 4 })
        );
        assert_eq!(parse_selection(&serde_json::Value::Null, "hello"), None);
    }
}
