//! tilawah-core - Error catalogue, evaluation records, and proficiency scoring.
//!
//! This crate defines the fixed verse segments, the reference catalogue of
//! recitation errors, the evaluation record model, and the scoring engine
//! that turns recorded errors into a per-verse and overall verdict. Storage
//! and the self-service lookup flow live here too so every front end shares
//! one implementation.

pub mod catalogue;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod scoring;
pub mod sheet;
pub mod store;
pub mod verse;

pub use config::TilawahConfig;
pub use error::EvaluationError;
pub use lookup::{bind_and_show, resolve_lookup, LookupOutcome};
pub use model::{EvaluationRecord, RecommendedTrack, VerseErrorSet, VerseErrors};
pub use scoring::{
    score_evaluation, score_verse, score_verses, ScoreLabel, ScoreResult, Tone, SAFE_SCORE_THRESHOLD,
};
pub use store::{EvaluationRepository, JsonDirStore, ListFilter, MemoryStore};
pub use verse::{Severity, VerseKey};
