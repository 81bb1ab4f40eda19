//! Fixed-size pagination over a derived list.

/// 1-based pager with a fixed page size.
///
/// The pager holds no data itself, only the page size, the current page
/// and the length of the list it paginates. [`super::ListState`] feeds it
/// a new length whenever the filtered list changes.
#[derive(Debug, Clone)]
pub struct Pager {
    page_size: usize,
    current: usize,
    total_items: usize,
}

impl Pager {
    /// Create a pager. A zero `page_size` is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
            total_items: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Total page count, `ceil(total_items / page_size)`. Zero items mean
    /// zero pages; navigation still clamps to page 1 in that case.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Update the paginated length, keeping the current page inside the
    /// new bounds.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current = self.clamp(self.current);
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Navigate to `page`, clamped to `[1, total_pages]`.
    pub fn go_to(&mut self, page: usize) {
        self.current = self.clamp(page);
    }

    pub fn next(&mut self) {
        self.go_to(self.current.saturating_add(1));
    }

    pub fn prev(&mut self) {
        self.go_to(self.current.saturating_sub(1));
    }

    /// Half-open index range of the current page within the list.
    pub fn bounds(&self) -> (usize, usize) {
        let start = (self.current - 1).saturating_mul(self.page_size);
        let start = start.min(self.total_items);
        let end = start.saturating_add(self.page_size).min(self.total_items);
        (start, end)
    }

    fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }
}
