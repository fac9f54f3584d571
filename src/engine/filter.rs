//! Filter stage of the list engine
//!
//! All predicates combine with AND. Each predicate treats an "empty"
//! control (empty search, empty college set, incomplete date range) as
//! matching every record.

use chrono::{DateTime, Utc};
use indexmap::IndexSet;

use crate::models::VisitorRecord;

use super::ViewState;

/// Inclusive absolute-instant range over `in_time`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

/// True when the search text is a case-insensitive substring of the
/// record's name or mobile number. Empty search matches everything.
pub fn matches_search(record: &VisitorRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.mobile_number.to_lowercase().contains(&needle)
}

/// True when the active college set is empty, or the record's college
/// (null coerced to "") is a member of it. A record with no college can
/// therefore never satisfy a non-empty filter set.
pub fn matches_colleges(record: &VisitorRecord, colleges: &IndexSet<String>) -> bool {
    if colleges.is_empty() {
        return true;
    }
    colleges.contains(record.college.as_deref().unwrap_or(""))
}

/// True when no range is active, or the record's `in_time` parses and
/// falls within it (inclusive). A record with a malformed or absent
/// `in_time` is excluded from an active range, never a panic.
pub fn matches_date_range(record: &VisitorRecord, range: Option<&DateRange>) -> bool {
    let Some(range) = range else {
        return true;
    };
    match record.parsed_in_time() {
        Some(instant) => instant >= range.from && instant <= range.to,
        None => false,
    }
}

/// Apply all active predicates, preserving input order
pub fn apply<'a>(records: &'a [VisitorRecord], state: &ViewState) -> Vec<&'a VisitorRecord> {
    records
        .iter()
        .filter(|r| {
            matches_search(r, state.search())
                && matches_colleges(r, state.colleges())
                && matches_date_range(r, state.date_range())
        })
        .collect()
}

/// Distinct colleges for the filter dropdown, computed from the full
/// record set (not the filtered one), in first-seen order. Null and
/// empty values are excluded.
pub fn distinct_colleges(records: &[VisitorRecord]) -> Vec<String> {
    let set: IndexSet<&str> = records
        .iter()
        .filter_map(|r| r.college.as_deref())
        .filter(|c| !c.is_empty())
        .collect();
    set.into_iter().map(String::from).collect()
}
