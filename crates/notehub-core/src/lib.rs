//! notehub-core - Core library for NoteHub
//!
//! This crate contains the models, HTTP client, form validation and view state
//! shared by NoteHub front ends. Rendering lives in the front-end crates.

pub mod api;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod form;
pub mod models;
pub mod pagination;

pub use api::{NotesApi, NotesClient};
pub use config::ClientConfig;
pub use controller::{ListRegion, NotesController, NotesView};
pub use error::{Error, Result};
pub use models::{NewNote, Note, NoteId, NoteListPage, NoteTag};
