//! This modules defines the common functionality for paging data.

/// The config for pagination
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// The page number to default to when not specified in a request.
    pub default_page: u64,
    /// The maximum number of search results to display per page.
    pub results_per_page: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            results_per_page: 10,
        }
    }
}

/// A button for moving between pages of results.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PageButton {
    /// Go back to the given page.
    Back(u64),
    /// Go forward to the given page.
    Next(u64),
}

/// The number of pages needed to show `item_count` items, `per_page` at a time.
pub fn page_count(item_count: usize, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }

    (item_count as u64).div_ceil(per_page)
}

/// Get the items on `page` (1-based), `per_page` items per page.
///
/// Pages outside of the valid range are empty, including pages so large that
/// their offset does not fit in a `u64`.
pub fn page_slice<T>(items: &[T], page: u64, per_page: u64) -> &[T] {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|previous_pages| previous_pages.checked_mul(per_page))
        .and_then(|start| usize::try_from(start).ok())
    else {
        return &[];
    };

    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(per_page as usize).min(items.len());

    &items[start..end]
}

/// Create the back/next buttons for `curr_page` out of `page_count` pages.
///
/// The first page only gets a next button, the last page only gets a back
/// button, and pages in between get both. A single page gets no buttons.
pub fn create_page_buttons(curr_page: u64, page_count: u64) -> Vec<PageButton> {
    let mut buttons = Vec::with_capacity(2);

    if curr_page > 1 && curr_page <= page_count {
        buttons.push(PageButton::Back(curr_page - 1));
    }

    if curr_page >= 1 && curr_page < page_count {
        buttons.push(PageButton::Next(curr_page + 1));
    }

    buttons
}

#[cfg(test)]
mod tests {
    use crate::pagination::{PageButton, create_page_buttons, page_count, page_slice};

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(15, 10), 2);
        assert_eq!(page_count(20, 10), 2);
        assert_eq!(page_count(0, 10), 0);
    }

    #[test]
    fn slices_first_page() {
        let items: Vec<u32> = (0..15).collect();

        assert_eq!(page_slice(&items, 1, 10), &items[0..10]);
    }

    #[test]
    fn slices_partial_last_page() {
        let items: Vec<u32> = (0..15).collect();

        assert_eq!(page_slice(&items, 2, 10), &items[10..15]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..15).collect();

        assert!(page_slice(&items, 0, 10).is_empty());
        assert!(page_slice(&items, 3, 10).is_empty());
    }

    #[test]
    fn huge_page_numbers_are_empty() {
        let items: Vec<u32> = (0..15).collect();

        assert!(page_slice(&items, u64::MAX, 10).is_empty());
        assert!(page_slice(&items, (1 << 63) + 1, 10).is_empty());
    }

    #[test]
    fn first_of_many_pages_only_has_next() {
        assert_eq!(create_page_buttons(1, 3), [PageButton::Next(2)]);
    }

    #[test]
    fn middle_page_has_back_and_next() {
        assert_eq!(
            create_page_buttons(2, 3),
            [PageButton::Back(1), PageButton::Next(3)]
        );
    }

    #[test]
    fn last_page_only_has_back() {
        assert_eq!(create_page_buttons(3, 3), [PageButton::Back(2)]);
    }

    #[test]
    fn single_page_has_no_buttons() {
        assert!(create_page_buttons(1, 1).is_empty());
    }
}
