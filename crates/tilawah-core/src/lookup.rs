//! Self-service lookup and name binding.
//!
//! A reciter types the code their examiner gave them. If the evaluation
//! already carries their name they go straight to the results; otherwise
//! they are asked for their name once, and then shown the results.

use serde::Serialize;
use uuid::Uuid;

use crate::error::EvaluationError;
use crate::model::EvaluationRecord;
use crate::store::EvaluationRepository;

/// Where the lookup flow goes next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// The record has a name; show its results.
    #[serde(rename = "results")]
    ShowResults { id: Uuid },
    /// The record has no name yet; ask for one.
    CaptureName { id: Uuid, unique_code: String },
}

impl LookupOutcome {
    pub fn id(&self) -> Uuid {
        match self {
            LookupOutcome::ShowResults { id } | LookupOutcome::CaptureName { id, .. } => *id,
        }
    }

    fn for_record(record: &EvaluationRecord) -> Self {
        if record.has_bound_subject() {
            LookupOutcome::ShowResults { id: record.id }
        } else {
            LookupOutcome::CaptureName {
                id: record.id,
                unique_code: record.unique_code.clone(),
            }
        }
    }
}

/// Resolve a typed code to the next step of the flow.
pub async fn resolve_lookup(
    repo: &dyn EvaluationRepository,
    typed: &str,
) -> Result<LookupOutcome, EvaluationError> {
    let record = repo
        .find_by_code_prefix(typed)
        .await?
        .ok_or_else(|| EvaluationError::CodeNotFound(typed.trim().to_string()))?;

    let outcome = LookupOutcome::for_record(&record);
    tracing::debug!(code = %typed.trim(), id = %record.id, ?outcome, "lookup resolved");
    Ok(outcome)
}

/// Bind the reciter's name to an unnamed record and return the updated
/// record, ready to be shown.
pub async fn bind_and_show(
    repo: &dyn EvaluationRepository,
    id: Uuid,
    subject_name: &str,
) -> Result<EvaluationRecord, EvaluationError> {
    repo.bind_subject(id, subject_name).await
}
