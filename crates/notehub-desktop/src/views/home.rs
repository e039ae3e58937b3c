//! Home view - main application screen

use std::sync::Arc;

use dioxus::prelude::*;

use notehub_core::form::NoteForm;
use notehub_core::{ListRegion, NewNote, NoteId};

use crate::components::{
    Button, ButtonVariant, Modal, NoteFormView, NoteList, PaginationBar, SearchBox,
};
use crate::queries::{invalidate_notes_query, latest_result, use_notes_query};
use crate::state::AppState;
use crate::theme::PALETTE;

/// Toolbar, note list and the create-note modal.
///
/// Mutations are spawned here rather than in the list or form so they keep
/// running when those components unmount.
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let view = (state.view)();
    let mut form = use_signal(NoteForm::new);

    let list = use_notes_query(Arc::clone(state.controller.api()), view.key());
    let result = latest_result(&list);
    let loaded = result.as_ref().and_then(|result| result.as_ref().ok());
    let settled_total = loaded.map(|page| page.total_pages);

    let controller = state.controller.clone();
    use_effect(use_reactive((&settled_total,), move |(settled_total,)| {
        if let Some(total_pages) = settled_total {
            controller.sync_total_pages(total_pages);
        }
    }));

    let controller = state.controller.clone();
    let on_search = move |text: String| controller.set_search(text);

    let controller = state.controller.clone();
    let on_page_change = move |page: u32| controller.set_page(page);

    let controller = state.controller.clone();
    let open_modal = move |_| {
        form.set(NoteForm::new());
        controller.open_modal();
    };

    let controller = state.controller.clone();
    let close_modal = move |()| {
        form.write().cancel();
        controller.close_modal();
    };

    let controller = state.controller.clone();
    let cancel_form = move |()| {
        form.write().cancel();
        controller.close_modal();
    };

    let controller = state.controller.clone();
    let create_note = move |note: NewNote| {
        let controller = controller.clone();
        spawn(async move {
            match controller.create_note(note).await {
                Ok(_) => {
                    invalidate_notes_query(controller.view().key()).await;
                    form.write().submission_succeeded();
                }
                Err(error) => form.write().submission_failed(error.to_string()),
            }
        });
    };

    let controller = state.controller.clone();
    let delete_note = move |id: NoteId| {
        let controller = controller.clone();
        spawn(async move {
            match controller.delete_note(id).await {
                Ok(Some(_)) => invalidate_notes_query(controller.view().key()).await,
                Ok(None) => {}
                Err(error) => tracing::error!("Failed to delete note: {}", error),
            }
        });
    };

    let pagination = view.pagination(loaded);
    let list_body = match ListRegion::resolve(result.as_ref()) {
        ListRegion::Notes(notes) => rsx! {
            NoteList { notes, on_delete: delete_note }
        },
        region => {
            let message = region.message().unwrap_or_default();
            rsx! {
                p {
                    class: "list-status",
                    style: "padding: 24px; text-align: center; color: {PALETTE.text_muted};",
                    "{message}"
                }
            }
        }
    };

    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; min-height: 100vh;",

            header {
                class: "toolbar",
                style: "
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 12px;
                    padding: 16px 24px;
                    border-bottom: 1px solid {PALETTE.border};
                    background: {PALETTE.bg_primary};
                ",

                SearchBox { value: view.search.clone(), on_change: on_search }

                if let Some(pagination) = pagination {
                    PaginationBar { pagination, on_page_change }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    onclick: open_modal,
                    "Create note +"
                }
            }

            main {
                class: "content-area",
                style: "flex: 1; padding-top: 24px;",
                {list_body}
            }

            if view.modal_open {
                Modal { on_close: close_modal,
                    NoteFormView { form, on_submit: create_note, on_cancel: cancel_form }
                }
            }
        }
    }
}
