use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use company_store::{Company, CompanySummary};
use tracing::debug;

use crate::AppState;
use crate::error::ApiError;

const SEARCH_PARAM: &str = "q";

pub async fn health() -> &'static str {
    "ok"
}

/// `GET /api/companies?q=...`
///
/// The query string is read as raw pairs so repeated or unknown parameters
/// never reject the request. The first `q` wins; a missing `q` searches for
/// the empty string.
pub async fn search_companies(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<CompanySummary>> {
    let query = params
        .into_iter()
        .find_map(|(key, value)| (key == SEARCH_PARAM).then_some(value))
        .unwrap_or_default();
    Json(state.directory.search(&query))
}

/// `GET /api/companies/:id`
///
/// An id segment that cannot be decoded can never match a record, so it is
/// answered with the same 404 as an unknown id.
pub async fn get_company(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Company>, ApiError> {
    let Path(id) = id.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "undecodable company id");
        ApiError::not_found()
    })?;
    let company = state.directory.lookup(&id)?;
    Ok(Json(company.clone()))
}

pub async fn route_not_found() -> ApiError {
    ApiError::not_found()
}
