//! Application state shared through Dioxus context.

use dioxus::prelude::*;

use notehub_core::{NotesClient, NotesController, NotesView};

/// Controller handle plus the latest view state it published.
#[derive(Clone)]
pub struct AppState {
    pub controller: NotesController<NotesClient>,
    /// Mirror of the controller's watch channel; rendering reads this
    pub view: Signal<NotesView>,
}
