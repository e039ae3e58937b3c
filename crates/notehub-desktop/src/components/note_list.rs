//! Note list component

use dioxus::prelude::*;

use notehub_core::{Note, NoteId};

use super::NoteCard;
use crate::state::AppState;

/// Grid of note cards for the current page
#[component]
pub fn NoteList(notes: Vec<Note>, on_delete: EventHandler<NoteId>) -> Element {
    let state = use_context::<AppState>();
    let view = (state.view)();

    rsx! {
        ul {
            class: "note-list",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                gap: 16px;
                margin: 0;
                padding: 0 24px 24px;
                list-style: none;
            ",

            for note in notes {
                {
                    let note_id = note.id.clone();
                    let deleting = view.is_deleting(&note_id);

                    rsx! {
                        NoteCard {
                            key: "{note_id}",
                            note,
                            deleting,
                            on_delete,
                        }
                    }
                }
            }
        }
    }
}
