//! Note creation form: field rules and the editing/submitting state machine.
//!
//! Validation runs entirely on the client. A draft that fails validation
//! never produces a [`NewNote`], so nothing reaches the network.

use crate::models::{NewNote, NoteTag};

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 50;
pub const CONTENT_MAX_CHARS: usize = 500;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const TITLE_TOO_SHORT: &str = "Min 3 characters";
pub const TITLE_TOO_LONG: &str = "Max 50 characters";
pub const CONTENT_REQUIRED: &str = "Content is required";
pub const CONTENT_TOO_LONG: &str = "Max 500 characters";
pub const TAG_REQUIRED: &str = "Tag is required";
pub const TAG_UNKNOWN: &str = "Tag must be one of: Todo, Work, Personal, Meeting, Shopping";

/// Raw field values as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    /// Select value; parsed into a [`NoteTag`] on validation
    pub tag: String,
}

impl Default for NoteDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            tag: NoteTag::default().to_string(),
        }
    }
}

/// Inline message per field. `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub content: Option<&'static str>,
    pub tag: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tag.is_none()
    }
}

/// Check every field of `draft`, returning the payload or all field errors.
pub fn validate(draft: &NoteDraft) -> Result<NewNote, FieldErrors> {
    let title_len = draft.title.chars().count();
    let content_len = draft.content.chars().count();

    let errors = FieldErrors {
        title: if title_len == 0 {
            Some(TITLE_REQUIRED)
        } else if title_len < TITLE_MIN_CHARS {
            Some(TITLE_TOO_SHORT)
        } else if title_len > TITLE_MAX_CHARS {
            Some(TITLE_TOO_LONG)
        } else {
            None
        },
        content: if content_len == 0 {
            Some(CONTENT_REQUIRED)
        } else if content_len > CONTENT_MAX_CHARS {
            Some(CONTENT_TOO_LONG)
        } else {
            None
        },
        tag: if draft.tag.trim().is_empty() {
            Some(TAG_REQUIRED)
        } else if draft.tag.parse::<NoteTag>().is_err() {
            Some(TAG_UNKNOWN)
        } else {
            None
        },
    };

    match draft.tag.parse::<NoteTag>() {
        Ok(tag) if errors.is_empty() => Ok(NewNote {
            title: draft.title.clone(),
            content: draft.content.clone(),
            tag,
        }),
        _ => Err(errors),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// Payload handed to the submission callback; waiting for its outcome
    Submitting,
    Closed,
}

/// State of an open note form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    draft: NoteDraft,
    errors: FieldErrors,
    phase: FormPhase,
    submit_error: Option<String>,
    attempted: bool,
}

impl NoteForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Message from the last rejected submission, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.edit(|draft| draft.title = title.into());
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.edit(|draft| draft.content = content.into());
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.edit(|draft| draft.tag = tag.into());
    }

    /// Validate and, if every field passes, move to `Submitting`.
    ///
    /// Returns the payload to hand to the submission callback. Returns `None`
    /// on validation failure or when a submission is already running.
    pub fn submit(&mut self) -> Option<NewNote> {
        if self.phase != FormPhase::Editing {
            return None;
        }
        self.attempted = true;
        self.submit_error = None;

        match validate(&self.draft) {
            Ok(note) => {
                self.errors = FieldErrors::default();
                self.phase = FormPhase::Submitting;
                Some(note)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// The submission callback failed; keep the values and return to editing.
    pub fn submission_failed(&mut self, message: impl Into<String>) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Editing;
            self.submit_error = Some(message.into());
        }
    }

    pub fn submission_succeeded(&mut self) {
        if self.phase == FormPhase::Submitting {
            *self = Self {
                phase: FormPhase::Closed,
                ..Self::default()
            };
        }
    }

    /// Discard every entered value and close.
    pub fn cancel(&mut self) {
        *self = Self {
            phase: FormPhase::Closed,
            ..Self::default()
        };
    }

    fn edit(&mut self, change: impl FnOnce(&mut NoteDraft)) {
        if self.phase != FormPhase::Editing {
            return;
        }
        change(&mut self.draft);
        if self.attempted {
            self.errors = validate(&self.draft).err().unwrap_or_default();
        }
    }
}
