//! Mapping of evaluation errors onto HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use tilawah_core::EvaluationError;

/// API error, rendered as `{"error": message}`.
#[derive(Debug)]
pub enum ApiError {
    /// The lookup, binding or store failed.
    Evaluation(EvaluationError),
    /// The request itself was malformed (bad id in the path, bad JSON body).
    Rejected(StatusCode, String),
}

impl From<EvaluationError> for ApiError {
    fn from(e: EvaluationError) -> Self {
        ApiError::Evaluation(e)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Rejected(status, _) => *status,
            ApiError::Evaluation(err) => match err {
                EvaluationError::CodeNotFound(_) | EvaluationError::NotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                EvaluationError::SubjectAlreadyBound(_)
                | EvaluationError::DuplicateCode(_)
                | EvaluationError::DuplicateId(_) => StatusCode::CONFLICT,
                EvaluationError::EmptyCode
                | EvaluationError::InvalidSubjectName(_)
                | EvaluationError::UnknownPhrase { .. }
                | EvaluationError::UnknownVerse(_) => StatusCode::UNPROCESSABLE_ENTITY,
                EvaluationError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Evaluation(err) if err.is_user_error() => err.to_string(),
            ApiError::Evaluation(err) => {
                tracing::error!("{}", err);
                "The evaluation store is unavailable.".to_string()
            }
            ApiError::Rejected(_, message) => message,
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
