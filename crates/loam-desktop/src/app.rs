//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;

use loam_core::editor::EditorState;
use loam_core::QuerySequencer;

use crate::services::HttpBackend;
use crate::state::AppState;
use crate::theme::Palette;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let notes = use_signal(Vec::new);
    let editor = use_signal(EditorState::default);
    let caret_restore = use_signal(|| None);
    let mut notice = use_signal(|| None::<String>);
    let mut backend = use_signal(|| None::<Arc<HttpBackend>>);
    let sequencer = use_signal(QuerySequencer::new);

    let state = use_context_provider(|| AppState {
        notes,
        editor,
        caret_restore,
        notice,
        backend,
        sequencer,
    });

    // Connect to the backend and load the initial note list (only once)
    use_effect(move || {
        if backend.peek().is_some() {
            return;
        }
        match HttpBackend::from_env() {
            Ok(client) => {
                tracing::info!("Using note API at {}", client.base_url());
                backend.set(Some(Arc::new(client)));
                state.refresh();
            }
            Err(error) => {
                tracing::error!("Failed to initialize backend client: {error}");
                notice.set(Some(error.to_string()));
            }
        }
    });

    let colors = Palette::DARK;

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
