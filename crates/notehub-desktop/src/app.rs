//! Main application component

use dioxus::prelude::*;

use notehub_core::{ClientConfig, NotesClient, NotesController};

use crate::state::AppState;
use crate::theme::PALETTE;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let controller = use_hook(build_controller);

    match controller {
        Ok(controller) => rsx! {
            NotesScreen { controller }
        },
        Err(message) => rsx! {
            div {
                class: "config-error",
                style: "
                    padding: 32px;
                    font-family: system-ui, -apple-system, sans-serif;
                    color: {PALETTE.danger};
                ",
                h2 { "NoteHub could not start" }
                p { "{message}" }
            }
        },
    }
}

fn build_controller() -> Result<NotesController<NotesClient>, String> {
    let config = ClientConfig::from_env().map_err(|error| {
        tracing::error!("Failed to load configuration: {}", error);
        error.to_string()
    })?;
    tracing::info!("Using notes service at {}", config.base_url);
    let client = NotesClient::new(config).map_err(|error| error.to_string())?;
    Ok(NotesController::new(client))
}

/// Owns the view signal and keeps it in sync with the controller.
#[component]
fn NotesScreen(controller: NotesController<NotesClient>) -> Element {
    let mut view = use_signal(|| controller.view());

    let state = use_context_provider(|| AppState {
        controller: controller.clone(),
        view,
    });

    use_future(move || {
        let controller = state.controller.clone();
        async move {
            let mut receiver = controller.subscribe();
            loop {
                view.set(receiver.borrow_and_update().clone());
                if receiver.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {PALETTE.bg_secondary};
                color: {PALETTE.text_primary};
            ",
            Home {}
        }
    }
}
