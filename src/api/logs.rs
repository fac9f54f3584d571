//! Authenticated visitor-logs dashboard endpoints

use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::Query;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    engine::{DateRange, Direction, SortKey, ViewState},
    error::AppResult,
    models::VisitorRecord,
};

use super::AuthenticatedSession;

/// Dashboard view parameters. `college` may repeat; each occurrence
/// toggles that tag into the active filter set.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct LogsQuery {
    /// Case-insensitive search over name and mobile number
    pub search: Option<String>,
    /// Active college filter tags
    #[serde(default)]
    pub college: Vec<String>,
    /// Date range lower bound (RFC 3339); only active together with `to`
    pub from: Option<DateTime<Utc>>,
    /// Date range upper bound (RFC 3339, inclusive)
    pub to: Option<DateTime<Utc>>,
    pub sort_key: Option<SortKey>,
    pub sort_dir: Option<Direction>,
    /// 1-based page; out-of-range values clamp
    pub page: Option<usize>,
}

impl LogsQuery {
    /// Assemble the view state through its mutators so the page-reset
    /// rules apply; the requested page lands last.
    fn view_state(self) -> ViewState {
        let mut state = ViewState::default();
        if let Some(search) = self.search {
            state.set_search(search);
        }
        for college in self.college {
            state.toggle_college(college);
        }
        if let (Some(from), Some(to)) = (self.from, self.to) {
            state.set_date_range(Some(DateRange { from, to }));
        }
        state.set_sort(
            self.sort_key.unwrap_or_default(),
            self.sort_dir.unwrap_or_default(),
        );
        if let Some(page) = self.page {
            state.set_page(page);
        }
        state
    }
}

/// A dashboard row. Feedback and geolocation are write-only fields and
/// never leave the store through this view.
#[derive(Debug, Serialize, ToSchema)]
pub struct VisitorRow {
    pub id: Uuid,
    pub name: String,
    pub mobile_number: String,
    pub college: Option<String>,
    pub person_to_meet: String,
    pub purpose_of_visit: String,
    pub in_time: Option<String>,
}

impl From<VisitorRecord> for VisitorRow {
    fn from(record: VisitorRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            mobile_number: record.mobile_number,
            college: record.college,
            person_to_meet: record.person_to_meet,
            purpose_of_visit: record.purpose_of_visit,
            in_time: record.in_time,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct VisitorLogsResponse {
    pub rows: Vec<VisitorRow>,
    /// Total records after filtering, across all pages
    pub total: usize,
    /// Page actually served (clamped into range)
    pub page: usize,
    pub page_count: usize,
}

/// List visitor logs: filtered, sorted, one page at a time
#[utoipa::path(
    get,
    path = "/visitor-logs",
    tag = "visitor_logs",
    security(("bearer_auth" = [])),
    params(LogsQuery),
    responses(
        (status = 200, description = "One page of the filtered logs", body = VisitorLogsResponse),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_logs(
    State(state): State<crate::AppState>,
    AuthenticatedSession(_session): AuthenticatedSession,
    Query(query): Query<LogsQuery>,
) -> AppResult<Json<VisitorLogsResponse>> {
    let dashboard = &state.services.dashboard;
    // A failed fetch is logged and the stale (or empty) snapshot is
    // served; no automatic retry.
    let _ = dashboard.refresh().await;

    let page = dashboard.view(&query.view_state()).await;
    Ok(Json(VisitorLogsResponse {
        rows: page.rows.into_iter().map(VisitorRow::from).collect(),
        total: page.total,
        page: page.page,
        page_count: page.page_count,
    }))
}

/// Distinct colleges present in the current record set, for the
/// filter dropdown
#[utoipa::path(
    get,
    path = "/visitor-logs/colleges",
    tag = "visitor_logs",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Distinct colleges", body = Vec<String>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_colleges(
    State(state): State<crate::AppState>,
    AuthenticatedSession(_session): AuthenticatedSession,
) -> AppResult<Json<Vec<String>>> {
    let dashboard = &state.services.dashboard;
    let _ = dashboard.refresh().await;
    Ok(Json(dashboard.colleges().await))
}

/// Export the full filtered-and-sorted set as a CSV download
#[utoipa::path(
    get,
    path = "/visitor-logs/export",
    tag = "visitor_logs",
    security(("bearer_auth" = [])),
    params(LogsQuery),
    responses(
        (status = 200, description = "CSV document", content_type = "text/csv"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn export_logs(
    State(state): State<crate::AppState>,
    AuthenticatedSession(_session): AuthenticatedSession,
    Query(query): Query<LogsQuery>,
) -> AppResult<impl IntoResponse> {
    let dashboard = &state.services.dashboard;
    let _ = dashboard.refresh().await;

    let (filename, csv) = dashboard.export(&query.view_state()).await;
    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    ))
}
