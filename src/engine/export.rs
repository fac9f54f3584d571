//! CSV export stage of the list engine
//!
//! Serializes the full filtered-and-sorted set (not just the visible
//! page) into a spreadsheet-friendly CSV document.

use chrono::{DateTime, Local, TimeZone};

use crate::models::VisitorRecord;

/// Column headers, in output order
const HEADER: [&str; 7] = [
    "Name",
    "Mobile",
    "College",
    "Person to Meet",
    "Purpose",
    "Date",
    "Time",
];

/// Wrap a field in double quotes, doubling any internal quotes, so
/// commas, quotes and newlines in free-text fields survive parsing.
pub fn csv_escape(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Emit the mobile number as the formula-style literal `="…"` so
/// spreadsheet applications keep it as text instead of dropping a
/// leading zero or switching to scientific notation. The wrapping
/// characters are structural; this field must NOT go through
/// [`csv_escape`].
fn mobile_cell(mobile: &str) -> String {
    if mobile.is_empty() {
        "\"\"".to_string()
    } else {
        format!("=\"{mobile}\"")
    }
}

/// Split an instant into local wall-clock date and time cells.
/// Unparseable or absent `in_time` renders each cell as a single dash.
fn wall_clock_cells<Tz>(instant: Option<DateTime<Tz>>) -> (String, String)
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match instant {
        Some(dt) => (
            dt.format("%d-%m-%Y").to_string(),
            dt.format("%H:%M:%S").to_string(),
        ),
        None => ("-".to_string(), "-".to_string()),
    }
}

/// Serialize rows into a CSV document rendered in the given timezone
pub fn to_csv_in<Tz>(rows: &[&VisitorRecord], tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        HEADER
            .iter()
            .map(|h| csv_escape(h))
            .collect::<Vec<_>>()
            .join(","),
    );

    for record in rows {
        let (date, time) =
            wall_clock_cells(record.parsed_in_time().map(|dt| dt.with_timezone(tz)));
        let cells = [
            csv_escape(&record.name),
            mobile_cell(&record.mobile_number),
            csv_escape(record.college.as_deref().unwrap_or("")),
            csv_escape(&record.person_to_meet),
            csv_escape(&record.purpose_of_visit),
            csv_escape(&date),
            csv_escape(&time),
        ];
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

/// Serialize rows in the server's local wall-clock
pub fn to_csv(rows: &[&VisitorRecord]) -> String {
    to_csv_in(rows, &Local)
}

/// Download filename stamped to the second, so repeated exports never
/// collide: `visitor_logs_YYYYMMDD_HHMMSS.csv`
pub fn filename(now: DateTime<Local>) -> String {
    now.format("visitor_logs_%Y%m%d_%H%M%S.csv").to_string()
}
