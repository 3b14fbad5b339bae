//! Name binding endpoint

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use tilawah_core::bind_and_show;
use tilawah_report::ResultsView;

use super::ApiError;
use crate::AppState;

/// Request body for binding a name.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub subject_name: String,
}

/// POST /api/evaluations/:id/profile
///
/// Binds the reciter's name to an unnamed evaluation and returns its results.
pub async fn bind_profile(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<Json<ResultsView>, ApiError> {
    let Path(id) = path?;
    let Json(body) = body?;
    let record = bind_and_show(state.repo.as_ref(), id, &body.subject_name).await?;
    Ok(Json(ResultsView::from_record(&record)))
}
