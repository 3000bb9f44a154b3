use crate::domain::entities::{DateQuery, QueryView, Verbosity};
use crate::domain::errors::HolidayError;
use crate::infrastructure::http::middleware::{ApiError, ApiResult, AppState};
use crate::infrastructure::http::response::HolidayResponse;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HolidayQueryParams {
    pub date: Option<String>,
    pub verbose: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerbosityParams {
    pub verbose: Option<String>,
}

/// GET /api/holiday?date=...&verbose=... - no date means today
pub async fn query_holiday(
    State(state): State<AppState>,
    Query(params): Query<HolidayQueryParams>,
) -> ApiResult<HolidayResponse> {
    let verbosity = Verbosity::from_param(params.verbose.as_deref());

    let query = match params.date.as_deref() {
        None | Some("") => DateQuery::Day(state.clock.today()),
        Some(date) => DateQuery::parse(date).map_err(|e| ApiError::new(e, verbosity))?,
    };

    respond(&state, query, verbosity).await
}

/// GET /api/holiday/:date?verbose=...
pub async fn get_holiday(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(params): Query<VerbosityParams>,
) -> ApiResult<HolidayResponse> {
    let verbosity = Verbosity::from_param(params.verbose.as_deref());
    let query = DateQuery::parse(&date).map_err(|e| ApiError::new(e, verbosity))?;

    respond(&state, query, verbosity).await
}

/// Fallback for any path the router does not know.
pub async fn not_found(Query(params): Query<VerbosityParams>) -> ApiError {
    ApiError::new(
        HolidayError::NotFound("no such endpoint".to_string()),
        Verbosity::from_param(params.verbose.as_deref()),
    )
}

async fn respond(
    state: &AppState,
    query: DateQuery,
    verbosity: Verbosity,
) -> ApiResult<HolidayResponse> {
    let records = state
        .holiday_service
        .resolve(query)
        .await
        .map_err(|e| ApiError::new(e, verbosity))?;

    Ok(HolidayResponse(QueryView::project(records, verbosity)))
}
