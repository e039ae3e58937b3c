//! Note card component

use dioxus::prelude::*;

use notehub_core::{Note, NoteId};

use super::{Button, ButtonVariant};
use crate::theme::PALETTE;

/// A single note rendered in the note list.
#[component]
pub fn NoteCard(note: Note, deleting: bool, on_delete: EventHandler<NoteId>) -> Element {
    let id = note.id.clone();
    let created = note.created_label();

    rsx! {
        li {
            class: "note-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 16px;
                border: 1px solid {PALETTE.border};
                border-radius: 8px;
                background: {PALETTE.bg_primary};
            ",

            h3 {
                class: "note-title",
                style: "margin: 0; font-size: 16px; overflow-wrap: anywhere;",
                "{note.title}"
            }

            p {
                class: "note-content",
                style: "
                    flex: 1;
                    margin: 0;
                    white-space: pre-wrap;
                    color: {PALETTE.text_secondary};
                ",
                "{note.content}"
            }

            div {
                class: "note-footer",
                style: "display: flex; align-items: center; gap: 8px;",

                span {
                    class: "note-tag",
                    style: "
                        padding: 2px 8px;
                        border-radius: 999px;
                        background: {PALETTE.bg_secondary};
                        font-size: 12px;
                    ",
                    "{note.tag}"
                }

                if let Some(created) = created {
                    span {
                        style: "font-size: 12px; color: {PALETTE.text_muted};",
                        "{created}"
                    }
                }

                div { style: "flex: 1;" }

                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: deleting,
                    onclick: move |_| on_delete.call(id.clone()),
                    if deleting { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}
