//! Fixed-size pages over a result list.

/// Splits a slice into pages of `page_size` items.
#[derive(Debug, Clone, Copy)]
pub struct Pages<'a, T> {
    items: &'a [T],
    page_size: usize,
}

impl<'a, T> Pages<'a, T> {
    /// Creates pages over `items`. A zero page size is treated as one.
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
        }
    }

    /// Returns the number of items per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of pages; zero for an empty list.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Returns the items on page `index` (0-based).
    ///
    /// Page 0 of an empty list is an empty slice; any other page past the
    /// end is `None`.
    pub fn page(&self, index: usize) -> Option<&'a [T]> {
        if index == 0 && self.items.is_empty() {
            return Some(&[]);
        }
        let start = index.checked_mul(self.page_size)?;
        if start >= self.items.len() {
            return None;
        }
        let end = (start + self.page_size).min(self.items.len());
        Some(&self.items[start..end])
    }

    /// Returns whether a page exists before `index`.
    pub fn has_previous(&self, index: usize) -> bool {
        index > 0
    }

    /// Returns whether a page exists after `index`.
    pub fn has_next(&self, index: usize) -> bool {
        index + 1 < self.total_pages()
    }
}
