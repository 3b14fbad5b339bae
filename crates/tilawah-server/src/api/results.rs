//! Results endpoints: JSON view, HTML page, and download.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use tilawah_core::{EvaluationError, EvaluationRecord};
use tilawah_report::html::generate_html;
use tilawah_report::ResultsView;

use super::ApiError;
use crate::AppState;

async fn load(state: &AppState, id: Uuid) -> Result<EvaluationRecord, ApiError> {
    state
        .repo
        .get(id)
        .await?
        .ok_or(ApiError::Evaluation(EvaluationError::NotFound(id)))
}

/// GET /api/results/:id
pub async fn get_results(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<ResultsView>, ApiError> {
    let Path(id) = path?;
    let record = load(&state, id).await?;
    Ok(Json(ResultsView::from_record(&record)))
}

/// GET /results/:id
pub async fn results_page(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Html<String>, ApiError> {
    let Path(id) = path?;
    let record = load(&state, id).await?;
    Ok(Html(generate_html(&ResultsView::from_record(&record))))
}

/// GET /results/:id/download
///
/// The HTML report as an attachment named `Assessment-<name>-<date>.html`.
pub async fn download_results(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = path?;
    let record = load(&state, id).await?;
    let view = ResultsView::from_record(&record);
    let disposition = format!("attachment; filename=\"{}\"", view.filename("html"));
    tracing::debug!(%id, "report downloaded");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        generate_html(&view),
    )
        .into_response())
}
