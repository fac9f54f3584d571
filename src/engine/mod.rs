//! The record list engine
//!
//! Pure, synchronous pipeline over an in-memory record set:
//! filter → sort → paginate, plus CSV export of the full
//! filtered-and-sorted sequence. No I/O and no side effects; given the
//! same records and [`ViewState`] it always produces the same view.

pub mod export;
pub mod filter;
pub mod page;
pub mod sort;

use indexmap::IndexSet;

use crate::models::VisitorRecord;

pub use filter::DateRange;
pub use page::PAGE_SIZE;
pub use sort::{Direction, SortKey};

/// User-controlled view parameters for the dashboard.
///
/// The mutators encode the reset rules: changing the search text, the
/// college filter set or the date range snaps back to page 1, while
/// changing the sort does not (the clamp in the pagination stage keeps
/// the page valid either way).
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    search: String,
    colleges: IndexSet<String>,
    date_range: Option<DateRange>,
    sort_key: SortKey,
    sort_direction: Direction,
    page: usize,
}

impl ViewState {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn colleges(&self) -> &IndexSet<String> {
        &self.colleges
    }

    pub fn date_range(&self) -> Option<&DateRange> {
        self.date_range.as_ref()
    }

    pub fn sort(&self) -> (SortKey, Direction) {
        (self.sort_key, self.sort_direction)
    }

    /// Current 1-based page (0 means "not set yet" and clamps to 1)
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Toggle a college tag: added if absent, removed if present
    pub fn toggle_college(&mut self, college: impl Into<String>) {
        let college = college.into();
        if !self.colleges.shift_remove(&college) {
            self.colleges.insert(college);
        }
        self.page = 1;
    }

    pub fn set_date_range(&mut self, range: Option<DateRange>) {
        self.date_range = range;
        self.page = 1;
    }

    /// Clear the college set and the date range, leaving the search
    /// text untouched
    pub fn clear_filters(&mut self) {
        self.colleges.clear();
        self.date_range = None;
        self.page = 1;
    }

    pub fn set_sort(&mut self, key: SortKey, direction: Direction) {
        self.sort_key = key;
        self.sort_direction = direction;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }
}

/// One page of the filtered, sorted record set
#[derive(Debug, Clone)]
pub struct ViewPage {
    pub rows: Vec<VisitorRecord>,
    /// Total records after filtering (across all pages)
    pub total: usize,
    /// Page actually served, after clamping
    pub page: usize,
    pub page_count: usize,
}

/// Run the full pipeline: filter, then sort, then slice out one page
pub fn run(records: &[VisitorRecord], state: &ViewState) -> ViewPage {
    let mut rows = filter::apply(records, state);
    let (key, direction) = state.sort();
    sort::apply(&mut rows, key, direction);

    let total = rows.len();
    let page_count = page::page_count(total);
    let current = page::clamp(state.page(), page_count);
    let rows = page::slice(&rows, current)
        .iter()
        .map(|r| (*r).clone())
        .collect();

    ViewPage {
        rows,
        total,
        page: current,
        page_count,
    }
}

/// Filter, sort and serialize the full set to CSV (every filtered row,
/// not just the current page)
pub fn export_csv(records: &[VisitorRecord], state: &ViewState) -> String {
    let mut rows = filter::apply(records, state);
    let (key, direction) = state.sort();
    sort::apply(&mut rows, key, direction);
    export::to_csv(&rows)
}


#[cfg(test)]
mod tests {
    use super::test_support::record;
    use super::*;

    fn sample() -> Vec<VisitorRecord> {
        vec![
            record("Amy", "0123456789", Some("SIT"), "2024-01-03T10:00:00Z"),
            record("Bo", "9876543210", Some("SIBM"), "2024-01-01T10:00:00Z"),
            record("Cy", "5550001234", None, "2024-01-02T10:00:00Z"),
        ]
    }

    fn names(page: &ViewPage) -> Vec<String> {
        page.rows.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn default_view_is_newest_first() {
        let page = run(&sample(), &ViewState::default());
        assert_eq!(names(&page), vec!["Amy", "Cy", "Bo"]);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn filtering_precedes_sorting_and_pagination() {
        // 11 records: ascending by name, "x10" would close page 1.
        // Filtering it out must pull "x11" onto page 1, which only
        // happens when the filter runs before the slice.
        let mut records: Vec<VisitorRecord> = (1..=11)
            .map(|i| {
                record(
                    &format!("x{i:02}"),
                    &format!("{i:010}"),
                    Some("SIT"),
                    "2024-01-01T00:00:00Z",
                )
            })
            .collect();
        records[9].name = "y-dropped".to_string();

        let mut state = ViewState::default();
        state.set_search("x");
        state.set_sort(SortKey::Name, Direction::Asc);

        let page = run(&records, &state);
        assert_eq!(page.total, 10);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.rows.len(), 10);
        assert_eq!(page.rows.last().unwrap().name, "x11");
    }

    #[test]
    fn toggle_college_has_set_semantics_and_resets_page() {
        let mut state = ViewState::default();
        state.set_page(3);
        state.toggle_college("SIT");
        assert_eq!(state.page(), 1);
        assert!(state.colleges().contains("SIT"));
        state.toggle_college("SIT");
        assert!(state.colleges().is_empty());
    }

    #[test]
    fn clear_filters_keeps_search_text() {
        let mut state = ViewState::default();
        state.set_search("amy");
        state.toggle_college("SIT");
        state.set_date_range(Some(DateRange {
            from: "2024-01-01T00:00:00Z".parse().unwrap(),
            to: "2024-01-31T23:59:59Z".parse().unwrap(),
        }));
        state.clear_filters();
        assert_eq!(state.search(), "amy");
        assert!(state.colleges().is_empty());
        assert!(state.date_range().is_none());
    }

    #[test]
    fn changing_sort_keeps_the_page() {
        let mut state = ViewState::default();
        state.set_page(2);
        state.set_sort(SortKey::Name, Direction::Asc);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn served_page_never_exceeds_page_count() {
        let records = sample();
        let mut state = ViewState::default();
        state.set_page(40);
        let page = run(&records, &state);
        assert_eq!(page.page, 1);
        assert_eq!(page.rows.len(), 3);
    }

    #[test]
    fn empty_set_is_page_one_of_one() {
        let page = run(&[], &ViewState::default());
        assert!(page.rows.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn null_college_is_excluded_by_any_active_filter() {
        let mut state = ViewState::default();
        state.toggle_college("SIT");
        let page = run(&sample(), &state);
        assert_eq!(names(&page), vec!["Amy"]);
    }

    #[test]
    fn export_serializes_the_filtered_sorted_set() {
        let mut state = ViewState::default();
        state.set_search("amy");
        let csv = export_csv(&sample(), &state);
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.lines().nth(1).unwrap().starts_with(r#""Amy""#));
    }
}
