//! Fixed-size paging over the crypto list.

use std::ops::Range;

/// Rows per page on the market table.
pub const PAGE_SIZE: usize = 15;

/// Splits an ordered item list into fixed-size pages, 1-based.
///
/// The current page is clamped whenever the item list shrinks, so it always
/// names a page that exists (page 1 for an empty list).
#[derive(Debug, Clone, PartialEq)]
pub struct Paginator<T> {
    items: Vec<T>,
    current: usize,
    page_size: usize,
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Paginator<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_page_size(items, PAGE_SIZE)
    }

    /// A page size of zero is treated as one.
    pub fn with_page_size(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            current: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replaces the item list, keeping the current page if it still exists.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.current = self.current.min(self.page_count());
    }

    /// Moves to `page`, clamped into `1..=page_count`. Returns the page
    /// actually selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.current = page.clamp(1, self.page_count());
        self.current
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.current + 1)
    }

    pub fn prev_page(&mut self) -> usize {
        self.set_page(self.current.saturating_sub(1))
    }

    /// Number of pages; at least 1 so an empty list still renders a page.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items on the current page.
    pub fn current_items(&self) -> &[T] {
        self.page(self.current).unwrap_or(&[])
    }

    /// Items on page `n` (1-based). `None` when `n` is 0 or past the end.
    /// Page 1 of an empty list is an empty slice.
    pub fn page(&self, n: usize) -> Option<&[T]> {
        if n == 0 || n > self.page_count() {
            return None;
        }
        self.bounds(n).map(|r| &self.items[r])
    }

    fn bounds(&self, n: usize) -> Option<Range<usize>> {
        let start = (n - 1).checked_mul(self.page_size)?;
        if start > self.items.len() {
            return None;
        }
        let end = start.saturating_add(self.page_size).min(self.items.len());
        Some(start..end)
    }
}
