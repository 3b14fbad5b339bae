//! Results view model.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use tilawah_core::catalogue;
use tilawah_core::scoring::ScoreLabel;
use tilawah_core::{
    score_evaluation, EvaluationRecord, RecommendedTrack, ScoreResult, Severity, VerseKey,
};

/// One verse as shown on the results page.
#[derive(Debug, Clone, Serialize)]
pub struct VerseView {
    pub key: VerseKey,
    pub label: &'static str,
    /// Arabic text of the segment.
    pub text: &'static str,
    pub score: u8,
    pub tone: tilawah_core::Tone,
    /// Whether the score is below the safe threshold.
    pub below_safe: bool,
    /// Obvious errors heard, in catalogue order.
    pub obvious: Vec<String>,
    /// Subtle errors heard, in catalogue order.
    pub subtle: Vec<String>,
}

impl VerseView {
    pub fn total_errors(&self) -> usize {
        self.obvious.len() + self.subtle.len()
    }
}

/// Everything shown about one evaluation, with scores derived at build time.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub id: Uuid,
    pub unique_code: String,
    pub subject_name: Option<String>,
    pub examiner: String,
    pub activity: String,
    pub group: String,
    pub recommended_track: RecommendedTrack,
    pub created_at: DateTime<Utc>,
    pub verses: Vec<VerseView>,
    pub scores: ScoreResult,
    pub total_errors: usize,
    pub weakest_verses: Vec<VerseKey>,
}

impl ResultsView {
    pub fn from_record(record: &EvaluationRecord) -> Self {
        let scores = score_evaluation(record);
        let below_safe = scores.verses_below_safe();

        let verses: Vec<VerseView> = record
            .verses
            .iter()
            .map(|(key, errors)| {
                let entry = catalogue::entry(key);
                let score = scores.verse(key);
                let phrases = |severity: Severity| -> Vec<String> {
                    errors
                        .map(|set| {
                            set.ordered_phrases(key, severity)
                                .into_iter()
                                .map(str::to_string)
                                .collect()
                        })
                        .unwrap_or_default()
                };
                VerseView {
                    key,
                    label: entry.label,
                    text: entry.text,
                    score,
                    tone: ScoreLabel::for_score(score).tone,
                    below_safe: below_safe.contains(&key),
                    obvious: phrases(Severity::Obvious),
                    subtle: phrases(Severity::Subtle),
                }
            })
            .collect();

        Self {
            id: record.id,
            unique_code: record.unique_code.clone(),
            subject_name: record.subject_name.clone(),
            examiner: record.examiner.clone(),
            activity: record.activity.clone(),
            group: record.group.clone(),
            recommended_track: record.recommended_track,
            created_at: record.created_at,
            total_errors: record.verses.total_errors(),
            weakest_verses: scores.weakest_verses(),
            verses,
            scores,
        }
    }

    /// The reciter's name, or a placeholder while none is bound.
    pub fn display_name(&self) -> &str {
        self.subject_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("(unnamed)")
    }

    pub fn label(&self) -> ScoreLabel {
        self.scores.label()
    }

    /// Suggested download file name for this view.
    pub fn filename(&self, extension: &str) -> String {
        report_filename(self.subject_name.as_deref(), self.created_at, extension)
    }

    /// Save the view to a JSON file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize results")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write results to {}", path.display()))?;
        Ok(())
    }
}

/// File name for a downloadable report: `Assessment-<name>-<date>.<ext>`.
///
/// The name is reduced to ASCII letters, digits, `-` and `_` so the result
/// is safe in a `Content-Disposition` header.
pub fn report_filename(subject_name: Option<&str>, date: DateTime<Utc>, extension: &str) -> String {
    let mut name = String::new();
    for c in subject_name.unwrap_or_default().trim().chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            name.push(c);
        } else if c.is_whitespace() && !name.ends_with('-') {
            name.push('-');
        }
    }
    let name = name.trim_matches('-');
    let name = if name.is_empty() { "reciter" } else { name };
    format!("Assessment-{}-{}.{}", name, date.format("%Y-%m-%d"), extension)
}
