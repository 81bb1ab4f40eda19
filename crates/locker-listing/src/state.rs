//! Combined list state: records + active query + pager.

use tracing::debug;

use crate::{ListQuery, ListRecord, Pager};

/// Owned record set with its derived visible subset and pagination.
///
/// All mutations go through whole-collection operations (append,
/// replace-by-id, remove-by-id); each one re-derives the filtered subset
/// and resets pagination to page 1, as does every filter change. Explicit
/// page navigation is the only operation that moves the current page.
#[derive(Debug, Clone)]
pub struct ListState<R: ListRecord + Clone> {
    records: Vec<R>,
    filtered: Vec<R>,
    query: ListQuery<R::Category>,
    pager: Pager,
}

impl<R: ListRecord + Clone> ListState<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            filtered: Vec::new(),
            query: ListQuery::default(),
            pager: Pager::new(page_size),
        }
    }

    // ---- record set ----

    /// Replace the whole record set (initial load, refresh).
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.refilter();
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Append a record.
    pub fn insert(&mut self, record: R) {
        self.records.push(record);
        self.refilter();
    }

    /// Replace the record with the same id. Returns false when absent.
    pub fn update(&mut self, record: R) -> bool {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                self.refilter();
                true
            }
            None => false,
        }
    }

    /// Apply `mutate` to the record with `id`. Returns false when absent.
    pub fn modify<F: FnOnce(&mut R)>(&mut self, id: u64, mutate: F) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                mutate(record);
                self.refilter();
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`. Returns false when absent.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        if self.records.len() == before {
            return false;
        }
        self.refilter();
        true
    }

    // ---- filters ----

    pub fn query(&self) -> &ListQuery<R::Category> {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.refilter();
    }

    pub fn set_category(&mut self, category: Option<R::Category>) {
        self.query.category = category;
        self.refilter();
    }

    pub fn set_window(&mut self, window: crate::DateWindow) {
        self.query.window = window;
        self.refilter();
    }

    /// Reset search, category and window in one step.
    pub fn clear_filters(&mut self) {
        self.query = ListQuery::default();
        self.refilter();
    }

    // ---- derived views ----

    pub fn filtered(&self) -> &[R] {
        &self.filtered
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The current page's slice of the filtered subset.
    pub fn page(&self) -> &[R] {
        let (start, end) = self.pager.bounds();
        &self.filtered[start..end]
    }

    pub fn current_page(&self) -> usize {
        self.pager.current()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages()
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    // ---- navigation ----

    pub fn go_to(&mut self, page: usize) {
        self.pager.go_to(page);
    }

    pub fn next_page(&mut self) {
        self.pager.next();
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    fn refilter(&mut self) {
        let needle = self.query.search.trim().to_lowercase();
        let now = chrono::Utc::now();
        let filtered: Vec<R> = self
            .records
            .iter()
            .filter(|r| self.query.accepts(*r, &needle, now))
            .cloned()
            .collect();
        self.filtered = filtered;
        self.pager.set_total_items(self.filtered.len());
        self.pager.reset();

        debug!(
            total = self.records.len(),
            visible = self.filtered.len(),
            "list refiltered"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{contains_ci, DateWindow};
    use chrono::{DateTime, Duration, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        id: u64,
        name: String,
        kind: char,
        at: Option<DateTime<Utc>>,
    }

    impl ListRecord for Entry {
        type Category = char;

        fn id(&self) -> u64 {
            self.id
        }

        fn matches_query(&self, needle: &str) -> bool {
            contains_ci(&self.name, needle)
        }

        fn category(&self) -> char {
            self.kind
        }

        fn timestamp(&self) -> Option<DateTime<Utc>> {
            self.at
        }
    }

    fn seed(n: usize) -> Vec<Entry> {
        (1..=n as u64)
            .map(|id| Entry {
                id,
                name: format!("entry {id}"),
                kind: if id % 2 == 0 { 'e' } else { 'o' },
                at: Some(Utc::now() - Duration::days(id as i64)),
            })
            .collect()
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let mut list = ListState::new(10);
        list.set_records(seed(7));
        assert_eq!(list.filtered_len(), 7);
        list.set_search("");
        assert_eq!(list.filtered_len(), 7);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut list = ListState::new(10);
        list.set_records(seed(12));
        list.set_search("ENTRY 1");
        // "entry 1", "entry 10", "entry 11", "entry 12"
        assert_eq!(list.filtered_len(), 4);
    }

    #[test]
    fn test_category_all_is_noop() {
        let mut list = ListState::new(10);
        list.set_records(seed(9));
        list.set_category(Some('e'));
        assert_eq!(list.filtered_len(), 4);
        assert!(list.filtered().iter().all(|r| r.kind == 'e'));
        list.set_category(None);
        assert_eq!(list.filtered_len(), 9);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut list = ListState::new(5);
        list.set_records(seed(30));
        list.go_to(3);
        assert_eq!(list.current_page(), 3);

        // still more than one page after narrowing (ids 1..=30 contain
        // "entry 1", "entry 10".."entry 19" = 11 matches, 3 pages of 5)
        list.set_search("entry 1");
        assert_eq!(list.filtered_len(), 11);
        assert!(list.total_pages() > 1);
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_page_slices() {
        let mut list = ListState::new(10);
        list.set_records(seed(25));
        assert_eq!(list.total_pages(), 3);
        assert_eq!(list.page().len(), 10);
        list.go_to(3);
        assert_eq!(list.page().len(), 5);
        assert_eq!(list.page()[0].id, 21);
    }

    #[test]
    fn test_go_to_is_clamped() {
        let mut list = ListState::new(10);
        list.set_records(seed(25));
        list.go_to(99);
        assert_eq!(list.current_page(), 3);
        list.go_to(0);
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_insert_update_remove() {
        let mut list = ListState::new(10);
        list.set_records(seed(3));

        list.insert(Entry {
            id: 42,
            name: "fresh".to_string(),
            kind: 'o',
            at: None,
        });
        assert_eq!(list.len(), 4);
        assert!(list.get(42).is_some());

        let updated = Entry {
            id: 42,
            name: "renamed".to_string(),
            kind: 'o',
            at: None,
        };
        assert!(list.update(updated));
        assert_eq!(list.get(42).map(|r| r.name.as_str()), Some("renamed"));

        assert!(list.remove(42));
        assert_eq!(list.len(), 3);
        assert!(list.get(42).is_none());
        assert!(!list.remove(42));
    }

    #[test]
    fn test_mutation_resets_page() {
        let mut list = ListState::new(5);
        list.set_records(seed(30));
        list.go_to(4);
        list.remove(1);
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_window_filters_by_timestamp() {
        let mut list = ListState::new(10);
        let mut records = seed(10); // ages 1..=10 days
        records.push(Entry {
            id: 99,
            name: "untimed".to_string(),
            kind: 'o',
            at: None,
        });
        list.set_records(records);

        list.set_window(DateWindow::Week);
        // ages 1..=6 days pass; the 7-day-old entry sits just past the
        // cutoff because seeding subtracted the duration before the
        // cutoff was computed
        assert!(list.filtered().iter().all(|r| r.id <= 7));
        assert!(list.filtered().iter().all(|r| r.id != 99));

        list.set_window(DateWindow::All);
        assert_eq!(list.filtered_len(), 11);
    }

    #[test]
    fn test_clear_filters() {
        let mut list = ListState::new(5);
        list.set_records(seed(20));
        list.set_search("entry 1");
        list.set_category(Some('e'));
        list.set_window(DateWindow::Week);
        assert!(list.filtered_len() < 20);

        list.clear_filters();
        assert_eq!(list.filtered_len(), 20);
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_empty_filtered_is_valid() {
        let mut list = ListState::new(10);
        list.set_records(seed(5));
        list.set_search("no such entry");
        assert_eq!(list.filtered_len(), 0);
        assert_eq!(list.page().len(), 0);
        assert_eq!(list.total_pages(), 0);
        assert_eq!(list.current_page(), 1);
    }
}
