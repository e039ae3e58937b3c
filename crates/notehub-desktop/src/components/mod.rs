//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod modal;
mod note_card;
mod note_form;
mod note_list;
mod pagination;
mod search_box;

pub use button::{Button, ButtonVariant};
pub use modal::Modal;
pub use note_card::NoteCard;
pub use note_form::NoteFormView;
pub use note_list::NoteList;
pub use pagination::PaginationBar;
pub use search_box::SearchBox;
