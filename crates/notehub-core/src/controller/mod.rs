//! Root coordinator for the notes screen.
//!
//! Owns page, search text, debounced search, the modal flag and the set of
//! notes being deleted, and publishes them through a `watch` channel. List
//! fetching and caching belong to the front end's query layer, keyed by
//! [`NotesView::key`].

mod view;

#[cfg(test)]
mod tests;

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::watch;

pub use view::{ListKey, ListRegion, NotesView, EMPTY_MESSAGE, ERROR_MESSAGE, LOADING_MESSAGE};

use crate::api::NotesApi;
use crate::config::SEARCH_DEBOUNCE;
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::models::{NewNote, Note, NoteId};

struct Inner<A> {
    api: Arc<A>,
    state: watch::Sender<NotesView>,
    search_debouncer: Debouncer<String>,
}

/// Shared handle to the notes screen state. Cheap to clone.
pub struct NotesController<A> {
    inner: Arc<Inner<A>>,
}

impl<A> Clone for NotesController<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A> PartialEq for NotesController<A> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A> Eq for NotesController<A> {}

impl<A: NotesApi> NotesController<A> {
    pub fn new(api: A) -> Self {
        Self::with_debounce(api, SEARCH_DEBOUNCE)
    }

    pub fn with_debounce(api: A, debounce: Duration) -> Self {
        let (state, _) = watch::channel(NotesView::default());
        let inner = Arc::new_cyclic(|weak: &Weak<Inner<A>>| {
            let weak = weak.clone();
            Inner {
                api: Arc::new(api),
                state,
                search_debouncer: Debouncer::new(debounce, move |search: String| {
                    if let Some(inner) = weak.upgrade() {
                        Self { inner }.apply_debounced_search(search);
                    }
                }),
            }
        });
        Self { inner }
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<NotesView> {
        self.inner.state.subscribe()
    }

    /// Copy of the current state.
    pub fn view(&self) -> NotesView {
        self.inner.state.borrow().clone()
    }

    /// Service handle, shared with the list query.
    pub fn api(&self) -> &Arc<A> {
        &self.inner.api
    }

    /// Record typed search text. The page resets to 1 right away; the query
    /// key follows once the text has been stable for the debounce window.
    pub fn set_search(&self, text: impl Into<String>) {
        let text = text.into();
        self.inner.state.send_modify(|view| {
            view.search.clone_from(&text);
            view.page = 1;
        });
        self.inner.search_debouncer.push(text);
    }

    /// Jump to `page`. Requesting the current page does nothing.
    pub fn set_page(&self, page: u32) {
        let page = page.max(1);
        let changed = self.inner.state.send_if_modified(|view| {
            if view.page == page {
                return false;
            }
            view.page = page;
            true
        });
        if changed {
            tracing::debug!(page, "page changed");
        }
    }

    /// Pull the page back inside `1..=total_pages` once a list result
    /// reports fewer pages than the current one, e.g. after deleting the
    /// only note on the last page.
    pub fn sync_total_pages(&self, total_pages: u32) {
        let last = total_pages.max(1);
        let changed = self.inner.state.send_if_modified(|view| {
            if view.page <= last {
                return false;
            }
            view.page = last;
            true
        });
        if changed {
            tracing::debug!(page = last, "page clamped to last page");
        }
    }

    pub fn open_modal(&self) {
        self.inner.state.send_if_modified(|view| {
            let changed = !view.modal_open;
            view.modal_open = true;
            changed
        });
    }

    pub fn close_modal(&self) {
        self.inner.state.send_if_modified(|view| {
            let changed = view.modal_open;
            view.modal_open = false;
            changed
        });
    }

    /// Create a note. On success the modal closes; the caller invalidates
    /// its cached lists.
    pub async fn create_note(&self, note: NewNote) -> Result<Note> {
        match self.inner.api.create_note(&note).await {
            Ok(created) => {
                tracing::info!(id = %created.id, title = %created.title, "created note");
                self.close_modal();
                Ok(created)
            }
            Err(error) => {
                tracing::warn!(%error, "failed to create note");
                Err(error)
            }
        }
    }

    /// Delete a note by id.
    ///
    /// Returns `Ok(None)` without calling the service when a delete for the
    /// same id is already in flight.
    pub async fn delete_note(&self, id: NoteId) -> Result<Option<Note>> {
        let claimed = self
            .inner
            .state
            .send_if_modified(|view| view.deleting.insert(id.clone()));
        if !claimed {
            tracing::debug!(%id, "delete already in flight");
            return Ok(None);
        }

        let result = self.inner.api.delete_note(&id).await;
        self.inner.state.send_modify(|view| {
            view.deleting.remove(&id);
        });

        match result {
            Ok(deleted) => {
                tracing::info!(%id, "deleted note");
                Ok(Some(deleted))
            }
            Err(error) => {
                tracing::warn!(%id, %error, "failed to delete note");
                Err(error)
            }
        }
    }

    fn apply_debounced_search(&self, search: String) {
        let changed = self.inner.state.send_if_modified(|view| {
            if view.debounced_search == search {
                return false;
            }
            view.debounced_search = search;
            view.page = 1;
            true
        });
        if changed {
            tracing::debug!(search = %self.inner.state.borrow().debounced_search, "search settled");
        }
    }
}
