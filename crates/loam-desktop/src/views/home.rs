//! Home view - main application screen
//!
//! Layout is a total function of the editor state: `visible_view` decides
//! whether the compose panel shows and which list the pane displays.

use dioxus::prelude::*;

use loam_core::editor::ListSource;

use crate::components::{ComposePanel, Notification, NoteList, SearchBar};
use crate::state::AppState;
use crate::theme::Palette;

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let editor = (state.editor)();
    let layout = editor.visible_view();
    let colors = Palette::DARK;

    let heading = match layout.list {
        ListSource::All => "All notes".to_string(),
        ListSource::SearchResults => format!("Results: \"{}\"", editor.search_query),
    };

    rsx! {
        div {
            class: "home-container",
            style: "
                max-width: 860px;
                margin: 0 auto;
                padding: 24px 16px;
                display: flex;
                flex-direction: column;
                gap: 16px;
            ",

            h1 {
                style: "margin: 0; font-size: 22px;",
                "Loam"
            }

            Notification {}
            SearchBar {}

            if layout.compose_visible {
                ComposePanel {}
            }

            div {
                class: "notes-section",

                h2 {
                    style: "
                        font-size: 16px;
                        margin: 8px 0;
                        color: {colors.text_secondary};
                    ",
                    "{heading}"
                }

                NoteList {}
            }
        }
    }
}
