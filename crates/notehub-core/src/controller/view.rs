//! Observable view state published by the notes controller.

use std::collections::BTreeSet;

use crate::models::{Note, NoteId, NoteListPage};
use crate::pagination::Pagination;

pub const LOADING_MESSAGE: &str = "Loading notes...";
pub const ERROR_MESSAGE: &str = "Error loading notes.";
pub const EMPTY_MESSAGE: &str = "No notes found.";

/// Key of a list query: debounced search text and page.
pub type ListKey = (String, u32);

/// UI-local state of the notes screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesView {
    /// Current page, 1-indexed
    pub page: u32,
    /// Search text as typed
    pub search: String,
    /// Search text after the quiet period; part of the query key
    pub debounced_search: String,
    pub modal_open: bool,
    /// Notes with a delete request in flight
    pub deleting: BTreeSet<NoteId>,
}

impl Default for NotesView {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            debounced_search: String::new(),
            modal_open: false,
            deleting: BTreeSet::new(),
        }
    }
}

/// What the note list region shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRegion {
    Loading,
    Error,
    Empty,
    Notes(Vec<Note>),
}

impl ListRegion {
    /// Region for the latest list result, `None` while nothing has arrived
    /// for the current key. An error wins over any earlier value.
    pub fn resolve<E>(result: Option<&Result<NoteListPage, E>>) -> Self {
        match result {
            None => Self::Loading,
            Some(Err(_)) => Self::Error,
            Some(Ok(page)) if page.is_empty() => Self::Empty,
            Some(Ok(page)) => Self::Notes(page.notes.clone()),
        }
    }

    /// Status line for the non-list states.
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Error => Some(ERROR_MESSAGE),
            Self::Empty => Some(EMPTY_MESSAGE),
            Self::Notes(_) => None,
        }
    }
}

impl NotesView {
    /// Query key of the list currently on screen.
    #[must_use]
    pub fn key(&self) -> ListKey {
        (self.debounced_search.clone(), self.page)
    }

    /// Page selector for `list`, hidden while the result spans a single page.
    ///
    /// Without a result the placeholder page count of 1 applies.
    #[must_use]
    pub fn pagination(&self, list: Option<&NoteListPage>) -> Option<Pagination> {
        let total_pages = list.map_or(NoteListPage::placeholder().total_pages, |page| {
            page.total_pages
        });
        Pagination::new(total_pages, self.page)
    }

    #[must_use]
    pub fn is_deleting(&self, id: &NoteId) -> bool {
        self.deleting.contains(id)
    }
}
