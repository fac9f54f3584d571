//! Pagination stage of the list engine

/// Fixed number of rows per dashboard page
pub const PAGE_SIZE: usize = 10;

/// Number of pages for a filtered total. An empty set is still
/// "page 1 of 1", so this is never 0.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Clamp a requested 1-based page into `[1, page_count]`
pub fn clamp(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count)
}

/// Slice out the rows of a (clamped) 1-based page. The engine never
/// returns rows for a page beyond `page_count`.
pub fn slice<'a, 'r>(rows: &'a [&'r crate::models::VisitorRecord], page: usize) -> &'a [&'r crate::models::VisitorRecord] {
    let page = clamp(page, page_count(rows.len()));
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(rows.len());
    if start >= rows.len() {
        &[]
    } else {
        &rows[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::record;
    use crate::models::VisitorRecord;

    #[test]
    fn page_count_is_at_least_one() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(10), 1);
        assert_eq!(page_count(11), 2);
        assert_eq!(page_count(25), 3);
    }

    #[test]
    fn twenty_five_records_page_three_holds_five() {
        let records: Vec<VisitorRecord> = (0..25)
            .map(|i| record(&format!("v{i}"), "1", None, "2024-01-01T00:00:00Z"))
            .collect();
        let rows: Vec<&VisitorRecord> = records.iter().collect();
        assert_eq!(slice(&rows, 1).len(), 10);
        assert_eq!(slice(&rows, 3).len(), 5);
        // page 4 does not exist; clamps back to the last page
        assert_eq!(slice(&rows, 4).len(), 5);
    }

    #[test]
    fn out_of_range_pages_clamp_without_panicking() {
        let records: Vec<VisitorRecord> = (0..3)
            .map(|i| record(&format!("v{i}"), "1", None, "2024-01-01T00:00:00Z"))
            .collect();
        let rows: Vec<&VisitorRecord> = records.iter().collect();
        assert_eq!(slice(&rows, 0).len(), 3);
        assert_eq!(slice(&rows, 99).len(), 3);
        let empty: Vec<&VisitorRecord> = Vec::new();
        assert!(slice(&empty, 1).is_empty());
        assert!(slice(&empty, 0).is_empty());
    }
}
