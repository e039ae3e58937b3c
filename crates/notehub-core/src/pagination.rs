//! Page selector model.
//!
//! Shows a window of pages around the current one plus the first and last
//! page, with ellipses for the gaps.

use std::collections::BTreeSet;

const PAGE_RANGE: u32 = 5;
const MARGIN_PAGES: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: u32, current: bool },
    Ellipsis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_pages: u32,
    current: u32,
}

impl Pagination {
    /// Returns `None` when there is at most one page; nothing is rendered then.
    #[must_use]
    pub fn new(total_pages: u32, current: u32) -> Option<Self> {
        (total_pages > 1).then(|| Self {
            total_pages,
            current: current.max(1),
        })
    }

    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Page to request when `page` is clicked. Selecting the current page or
    /// a page outside `1..=total_pages` requests nothing.
    #[must_use]
    pub const fn select(&self, page: u32) -> Option<u32> {
        if page == self.current || page == 0 || page > self.total_pages {
            None
        } else {
            Some(page)
        }
    }

    #[must_use]
    pub const fn previous(&self) -> Option<u32> {
        if self.current > 1 {
            self.select(self.current - 1)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn next(&self) -> Option<u32> {
        self.select(self.current + 1)
    }

    /// Page buttons and gaps, in display order.
    #[must_use]
    pub fn items(&self) -> Vec<PageItem> {
        let total = self.total_pages;
        let mut shown = BTreeSet::new();

        if total <= PAGE_RANGE + 2 * MARGIN_PAGES {
            shown.extend(1..=total);
        } else {
            shown.extend(1..=MARGIN_PAGES);
            shown.extend(total - MARGIN_PAGES + 1..=total);

            let current = self.current.min(total);
            let start = current
                .saturating_sub(PAGE_RANGE / 2)
                .clamp(1, total - PAGE_RANGE + 1);
            shown.extend(start..start + PAGE_RANGE);
        }

        let mut items = Vec::with_capacity(shown.len() + 2);
        let mut previous = 0;
        for number in shown {
            match number - previous {
                1 => {}
                2 => items.push(self.page_item(number - 1)),
                _ => items.push(PageItem::Ellipsis),
            }
            items.push(self.page_item(number));
            previous = number;
        }
        items
    }

    const fn page_item(&self, number: u32) -> PageItem {
        PageItem::Page {
            number,
            current: number == self.current,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn numbers(items: &[PageItem]) -> Vec<Option<u32>> {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page { number, .. } => Some(*number),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn single_page_renders_nothing() {
        assert_eq!(Pagination::new(1, 1), None);
        assert_eq!(Pagination::new(0, 1), None);
        assert!(Pagination::new(2, 1).is_some());
    }

    #[test]
    fn selecting_current_page_is_a_no_op() {
        let pagination = Pagination::new(4, 2).unwrap();
        assert_eq!(pagination.select(2), None);
        assert_eq!(pagination.select(3), Some(3));
        assert_eq!(pagination.select(5), None);
    }

    #[test]
    fn previous_and_next_stop_at_bounds() {
        let first = Pagination::new(3, 1).unwrap();
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some(2));

        let last = Pagination::new(3, 3).unwrap();
        assert_eq!(last.previous(), Some(2));
        assert_eq!(last.next(), None);
    }

    #[test]
    fn few_pages_are_all_shown() {
        let pagination = Pagination::new(2, 1).unwrap();
        assert_eq!(
            pagination.items(),
            vec![
                PageItem::Page {
                    number: 1,
                    current: true
                },
                PageItem::Page {
                    number: 2,
                    current: false
                },
            ]
        );
    }

    #[test]
    fn many_pages_use_ellipses_around_window() {
        let pagination = Pagination::new(20, 10).unwrap();
        assert_eq!(
            numbers(&pagination.items()),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn single_page_gap_shows_the_page() {
        let pagination = Pagination::new(20, 4).unwrap();
        assert_eq!(
            numbers(&pagination.items()),
            vec![
                Some(1),
                Some(2),
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn window_clamps_at_the_end() {
        let pagination = Pagination::new(20, 20).unwrap();
        assert_eq!(
            numbers(&pagination.items()),
            vec![
                Some(1),
                None,
                Some(16),
                Some(17),
                Some(18),
                Some(19),
                Some(20)
            ]
        );
    }
}
