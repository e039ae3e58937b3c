//! Search box component

use dioxus::prelude::*;

use crate::theme::PALETTE;

/// Free-text search input. Every keystroke is reported; debouncing happens
/// in the notes controller.
#[component]
pub fn SearchBox(value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "search-box",
            r#type: "text",
            placeholder: "Search notes",
            value: "{value}",
            oninput: move |evt| on_change.call(evt.value()),
            style: "
                flex: 1;
                min-width: 200px;
                padding: 8px 12px;
                border: 1px solid {PALETTE.border};
                border-radius: 6px;
                font-size: 14px;
                background: {PALETTE.bg_primary};
                color: {PALETTE.text_primary};
                outline: none;
            ",
        }
    }
}
