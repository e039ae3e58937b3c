//! Data models for NoteHub

mod note;
mod page;

pub use note::{NewNote, Note, NoteId, NoteTag, ParseNoteTagError};
pub use page::{total_pages_for, NoteListPage, PER_PAGE};
