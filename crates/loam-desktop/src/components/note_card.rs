//! Note card component

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

use loam_core::Note;

use crate::theme::Palette;

/// A single note rendered in the list pane.
///
/// Content is rendered as Markdown, so embedded data-URI image fragments
/// show up as actual images and fenced code blocks keep their structure.
#[component]
pub fn NoteCard(
    note: Note,
    on_edit: EventHandler<MouseEvent>,
    on_delete: EventHandler<MouseEvent>,
) -> Element {
    let colors = Palette::DARK;
    let rendered = render_markdown(&note.content);

    rsx! {
        div {
            class: "note-card",
            style: "
                border: 1px solid {colors.border};
                border-radius: 8px;
                background: {colors.bg_secondary};
                padding: 12px 16px;
            ",

            div {
                class: "note-header",
                style: "display: flex; justify-content: space-between; align-items: center;",

                h3 {
                    style: "margin: 0; color: {colors.text_primary};",
                    "{note.title}"
                }

                div {
                    class: "actions",
                    style: "display: flex; gap: 6px;",

                    button {
                        class: "btn-edit",
                        title: "Edit",
                        onclick: move |evt| on_edit.call(evt),
                        style: "
                            background: {colors.bg_tertiary};
                            border: none;
                            border-radius: 4px;
                            color: {colors.text_secondary};
                            cursor: pointer;
                            padding: 4px 8px;
                        ",
                        "✎"
                    }

                    button {
                        class: "btn-delete",
                        title: "Delete",
                        onclick: move |evt| on_delete.call(evt),
                        style: "
                            background: {colors.bg_tertiary};
                            border: none;
                            border-radius: 4px;
                            color: {colors.danger};
                            cursor: pointer;
                            padding: 4px 8px;
                        ",
                        "✕"
                    }
                }
            }

            div {
                class: "note-content markdown-body",
                style: "
                    margin: 8px 0;
                    word-break: break-word;
                    color: {colors.text_secondary};
                ",
                dangerous_inner_html: "{rendered}",
            }

            div {
                class: "note-footer",
                style: "display: flex; justify-content: space-between; align-items: center;",

                div {
                    class: "tags",
                    style: "display: flex; gap: 6px; flex-wrap: wrap;",

                    for tag in note.tags.clone() {
                        span {
                            class: "tag",
                            style: "
                                background: {colors.bg_tertiary};
                                border-radius: 10px;
                                padding: 2px 8px;
                                font-size: 12px;
                                color: {colors.text_secondary};
                            ",
                            "#{tag}"
                        }
                    }
                }

                span {
                    class: "id-badge",
                    style: "font-size: 11px; color: {colors.text_muted};",
                    "ID: {note.id}"
                }
            }
        }
    }
}

/// Render note Markdown to HTML for display.
///
/// The editor guarantees content is well-formed Markdown with embedded
/// data-URI image fragments; both those and fenced code blocks pass through
/// to the rendered output untouched.
fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(content, options);

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
