//! Code lookup endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use tilawah_core::{resolve_lookup, LookupOutcome};

use super::ApiError;
use crate::AppState;

/// Request body for a code lookup.
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub unique_code: String,
}

/// POST /api/lookup
///
/// Resolves a typed code (case-insensitive prefix) to the next step:
/// `{"outcome": "results", "id"}` or
/// `{"outcome": "capture_name", "id", "unique_code"}`.
pub async fn lookup_code(
    State(state): State<AppState>,
    body: Result<Json<LookupRequest>, JsonRejection>,
) -> Result<Json<LookupOutcome>, ApiError> {
    let Json(body) = body?;
    let outcome = resolve_lookup(state.repo.as_ref(), &body.unique_code).await?;
    Ok(Json(outcome))
}
