//! Evaluation error types.
//!
//! Scoring itself cannot fail; these errors come from the lookup flow,
//! record validation, and storage. Their messages are shown to reciters and
//! examiners as-is.

use thiserror::Error;
use uuid::Uuid;

use crate::verse::{Severity, VerseKey};

/// Errors raised while storing, finding, or binding evaluation records.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// No record matches the typed unique code.
    #[error("No evaluation found for that code.")]
    CodeNotFound(String),

    /// No record has the given identifier.
    #[error("No evaluation found with id {0}.")]
    NotFound(Uuid),

    /// The unique code was empty after trimming.
    #[error("A unique code is required.")]
    EmptyCode,

    /// The subject name failed validation.
    #[error("Invalid name: {0}")]
    InvalidSubjectName(String),

    /// The record already has a bound subject name.
    #[error("Evaluation {0} already has a name on record.")]
    SubjectAlreadyBound(Uuid),

    /// Another record already uses this unique code.
    #[error("Unique code '{0}' is already in use.")]
    DuplicateCode(String),

    /// A record with this id is already stored.
    #[error("Evaluation {0} already exists.")]
    DuplicateId(Uuid),

    /// A selected phrase is not in the catalogue for its verse and class.
    #[error("'{phrase}' is not a listed {severity} error for {verse}")]
    UnknownPhrase {
        verse: VerseKey,
        severity: Severity,
        phrase: String,
    },

    /// A verse key outside the fixed set.
    #[error("unknown verse key: {0}")]
    UnknownVerse(String),

    /// Reading or writing the store failed.
    #[error("storage error: {0}")]
    Storage(String),
}

impl EvaluationError {
    /// Returns `true` if the error was caused by caller input rather than
    /// the store.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, EvaluationError::Storage(_))
    }
}

impl From<std::io::Error> for EvaluationError {
    fn from(e: std::io::Error) -> Self {
        EvaluationError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for EvaluationError {
    fn from(e: serde_json::Error) -> Self {
        EvaluationError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        let e = EvaluationError::CodeNotFound("AB12".into());
        assert_eq!(e.to_string(), "No evaluation found for that code.");
        assert!(e.is_user_error());

        let e = EvaluationError::UnknownPhrase {
            verse: VerseKey::Verse2,
            severity: Severity::Subtle,
            phrase: "x".into(),
        };
        assert_eq!(e.to_string(), "'x' is not a listed subtle error for ayat_2");
    }

    #[test]
    fn io_errors_become_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let e: EvaluationError = io.into();
        assert!(matches!(e, EvaluationError::Storage(_)));
        assert!(!e.is_user_error());
    }
}
