//! Sort stage of the list engine
//!
//! Each sort key carries its own comparator. String keys compare on a
//! collation key (NFKD with combining marks stripped, lowercased) so
//! accented names order where a human expects, with the raw string as
//! tiebreak so the ordering stays total and deterministic.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};
use utoipa::ToSchema;

use crate::models::VisitorRecord;

/// Field the dashboard sorts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    InTime,
    Name,
    College,
    MobileNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    #[default]
    Desc,
}

impl SortKey {
    /// Ascending comparator for this key
    pub fn compare(self, a: &VisitorRecord, b: &VisitorRecord) -> Ordering {
        match self {
            // Parse failure sorts as the earliest possible instant, so
            // invalid rows sink to the bottom of the newest-first view.
            SortKey::InTime => in_time_or_min(a).cmp(&in_time_or_min(b)),
            SortKey::Name => compare_text(&a.name, &b.name),
            SortKey::College => compare_text(
                a.college.as_deref().unwrap_or(""),
                b.college.as_deref().unwrap_or(""),
            ),
            SortKey::MobileNumber => compare_text(&a.mobile_number, &b.mobile_number),
        }
    }
}

fn in_time_or_min(record: &VisitorRecord) -> DateTime<Utc> {
    record.parsed_in_time().unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn collation_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Stable sort of the filtered sequence. `Desc` mirrors `Asc` by
/// swapping operands, not by a separate comparator.
pub fn apply(rows: &mut [&VisitorRecord], key: SortKey, direction: Direction) {
    match direction {
        Direction::Asc => rows.sort_by(|a, b| key.compare(a, b)),
        Direction::Desc => rows.sort_by(|a, b| key.compare(b, a)),
    }
}
