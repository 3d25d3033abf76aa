//! Search bar component

use dioxus::prelude::*;

use loam_core::editor::EditorAction;

use crate::state::AppState;
use crate::theme::Palette;

/// Search bar driving the backend full-text search
#[component]
pub fn SearchBar() -> Element {
    let state = use_context::<AppState>();
    let query = state.editor.read().search_query.clone();
    let colors = Palette::DARK;

    rsx! {
        div {
            class: "search-bar",

            input {
                r#type: "text",
                placeholder: "Search title, text, tags...",
                value: "{query}",
                oninput: move |evt| {
                    state.dispatch(EditorAction::SearchChanged(evt.value()));
                    state.refresh();
                },
                style: "
                    width: 100%;
                    box-sizing: border-box;
                    padding: 12px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    font-size: 15px;
                    background: {colors.bg_secondary};
                    color: {colors.text_primary};
                    outline: none;
                ",
            }
        }
    }
}
