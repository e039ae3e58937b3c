//! Paged list results

use super::Note;

/// Fixed page size requested from the notes service.
pub const PER_PAGE: u32 = 12;

/// One page of notes for a search filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListPage {
    pub notes: Vec<Note>,
    /// Always at least 1, even for an empty result set
    pub total_pages: u32,
    pub total_results: u32,
}

impl NoteListPage {
    /// Value shown while the first fetch for a key is pending.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            notes: Vec::new(),
            total_pages: 1,
            total_results: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl Default for NoteListPage {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Number of pages needed to show `total_results` at `per_page` per page.
///
/// Never returns less than 1.
#[must_use]
pub const fn total_pages_for(total_results: u32, per_page: u32) -> u32 {
    if per_page == 0 || total_results == 0 {
        return 1;
    }
    total_results.div_ceil(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_has_one_page() {
        let page = NoteListPage::placeholder();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_results, 0);
    }

    #[test]
    fn test_total_pages_for() {
        assert_eq!(total_pages_for(0, PER_PAGE), 1);
        assert_eq!(total_pages_for(12, PER_PAGE), 1);
        assert_eq!(total_pages_for(13, PER_PAGE), 2);
        assert_eq!(total_pages_for(25, PER_PAGE), 3);
    }
}
