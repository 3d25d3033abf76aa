//! Dismissible backend error notice

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::Palette;

/// Banner showing the most recent backend failure, if any
#[component]
pub fn Notification() -> Element {
    let mut state = use_context::<AppState>();
    let colors = Palette::DARK;

    let Some(message) = (state.notice)() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "notification",
            style: "
                display: flex;
                align-items: center;
                justify-content: space-between;
                gap: 12px;
                padding: 10px 12px;
                border: 1px solid {colors.danger};
                border-radius: 6px;
                color: {colors.danger};
                background: {colors.bg_secondary};
            ",

            span { "{message}" }

            button {
                onclick: move |_| state.notice.set(None),
                style: "
                    background: transparent;
                    border: none;
                    color: {colors.text_muted};
                    cursor: pointer;
                    font-size: 16px;
                ",
                "✕"
            }
        }
    }
}
