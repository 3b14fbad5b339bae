//! Evaluation record types.
//!
//! An evaluation record is what an examiner captures for one reciter: the
//! context of the session, the recommended follow-up track, and for each of
//! the eight verse segments the error phrases that were heard.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalogue;
use crate::verse::{Severity, VerseKey};

/// Length of generated unique codes.
pub const UNIQUE_CODE_LENGTH: usize = 8;

/// Maximum length of a subject name.
pub const MAX_SUBJECT_NAME_LEN: usize = 255;

/// Errors selected for one verse.
///
/// Selections are sets, so a phrase counts at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseErrorSet {
    /// Obvious (*jaliy*) errors heard.
    #[serde(default, alias = "jaliy")]
    pub obvious: BTreeSet<String>,
    /// Subtle (*khafiy*) errors heard.
    #[serde(default, alias = "khafiy")]
    pub subtle: BTreeSet<String>,
}

impl VerseErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from obvious and subtle phrase lists.
    pub fn from_phrases<O, S>(obvious: O, subtle: S) -> Self
    where
        O: IntoIterator,
        O::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            obvious: obvious.into_iter().map(Into::into).collect(),
            subtle: subtle.into_iter().map(Into::into).collect(),
        }
    }

    pub fn phrases(&self, severity: Severity) -> &BTreeSet<String> {
        match severity {
            Severity::Obvious => &self.obvious,
            Severity::Subtle => &self.subtle,
        }
    }

    /// Number of errors across both classes.
    pub fn total_errors(&self) -> usize {
        self.obvious.len() + self.subtle.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_errors() == 0
    }

    /// Phrases of one class ordered as the catalogue lists them for `key`.
    /// Phrases the catalogue no longer carries come last, alphabetically.
    pub fn ordered_phrases(&self, key: VerseKey, severity: Severity) -> Vec<&str> {
        let mut phrases: Vec<&str> = self.phrases(severity).iter().map(String::as_str).collect();
        phrases.sort_by_key(|p| catalogue::position(key, severity, p).unwrap_or(usize::MAX));
        phrases
    }
}

/// The eight per-verse error slots of a record. `None` means no errors
/// were recorded for that verse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseErrors {
    #[serde(default, rename = "ayat_1")]
    pub verse_1: Option<VerseErrorSet>,
    #[serde(default, rename = "ayat_2")]
    pub verse_2: Option<VerseErrorSet>,
    #[serde(default, rename = "ayat_3")]
    pub verse_3: Option<VerseErrorSet>,
    #[serde(default, rename = "ayat_4")]
    pub verse_4: Option<VerseErrorSet>,
    #[serde(default, rename = "ayat_5")]
    pub verse_5: Option<VerseErrorSet>,
    #[serde(default, rename = "ayat_6")]
    pub verse_6: Option<VerseErrorSet>,
    #[serde(default, rename = "ayat_7")]
    pub verse_7_part_1: Option<VerseErrorSet>,
    #[serde(default, rename = "ayat_7_part_2")]
    pub verse_7_part_2: Option<VerseErrorSet>,
}

impl VerseErrors {
    pub fn get(&self, key: VerseKey) -> Option<&VerseErrorSet> {
        self.slot(key).as_ref()
    }

    pub fn set(&mut self, key: VerseKey, errors: Option<VerseErrorSet>) {
        *self.slot_mut(key) = errors;
    }

    /// Slots in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (VerseKey, Option<&VerseErrorSet>)> + '_ {
        VerseKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    /// Errors recorded across all verses.
    pub fn total_errors(&self) -> usize {
        self.iter()
            .filter_map(|(_, set)| set)
            .map(VerseErrorSet::total_errors)
            .sum()
    }

    fn slot(&self, key: VerseKey) -> &Option<VerseErrorSet> {
        match key {
            VerseKey::Verse1 => &self.verse_1,
            VerseKey::Verse2 => &self.verse_2,
            VerseKey::Verse3 => &self.verse_3,
            VerseKey::Verse4 => &self.verse_4,
            VerseKey::Verse5 => &self.verse_5,
            VerseKey::Verse6 => &self.verse_6,
            VerseKey::Verse7Part1 => &self.verse_7_part_1,
            VerseKey::Verse7Part2 => &self.verse_7_part_2,
        }
    }

    fn slot_mut(&mut self, key: VerseKey) -> &mut Option<VerseErrorSet> {
        match key {
            VerseKey::Verse1 => &mut self.verse_1,
            VerseKey::Verse2 => &mut self.verse_2,
            VerseKey::Verse3 => &mut self.verse_3,
            VerseKey::Verse4 => &mut self.verse_4,
            VerseKey::Verse5 => &mut self.verse_5,
            VerseKey::Verse6 => &mut self.verse_6,
            VerseKey::Verse7Part1 => &mut self.verse_7_part_1,
            VerseKey::Verse7Part2 => &mut self.verse_7_part_2,
        }
    }
}

/// Follow-up program the examiner recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendedTrack {
    /// Foundation (remedial) track.
    #[serde(alias = "HITS Dasar")]
    Foundation,
    /// Advanced track.
    #[serde(alias = "HITS Lanjutan")]
    Advanced,
}

impl RecommendedTrack {
    /// Human-readable name.
    pub fn title(&self) -> &'static str {
        match self {
            RecommendedTrack::Foundation => "Foundation",
            RecommendedTrack::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for RecommendedTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendedTrack::Foundation => write!(f, "foundation"),
            RecommendedTrack::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for RecommendedTrack {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "foundation" | "basic" | "hits dasar" => Ok(RecommendedTrack::Foundation),
            "advanced" | "hits lanjutan" => Ok(RecommendedTrack::Advanced),
            other => Err(format!("unknown recommended track: {other}")),
        }
    }
}

/// One reciter's evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Opaque identifier, safe to put in shareable URLs.
    pub id: Uuid,
    /// Examiner-issued code the reciter types to find this record.
    pub unique_code: String,
    /// The reciter's name; unset until bound.
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub examiner: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub group: String,
    pub recommended_track: RecommendedTrack,
    /// Selected errors per verse.
    #[serde(default)]
    pub verses: VerseErrors,
    pub created_at: DateTime<Utc>,
}

impl EvaluationRecord {
    /// Create a record with a fresh id, no errors, and no bound subject.
    pub fn new(
        unique_code: impl Into<String>,
        examiner: impl Into<String>,
        activity: impl Into<String>,
        group: impl Into<String>,
        recommended_track: RecommendedTrack,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            unique_code: normalize_code(&unique_code.into()),
            subject_name: None,
            examiner: examiner.into(),
            activity: activity.into(),
            group: group.into(),
            recommended_track,
            verses: VerseErrors::default(),
            created_at: Utc::now(),
        }
    }

    pub fn with_subject_name(mut self, name: impl Into<String>) -> Self {
        self.subject_name = Some(name.into());
        self
    }

    pub fn with_verse(mut self, key: VerseKey, errors: VerseErrorSet) -> Self {
        self.verses.set(key, Some(errors));
        self
    }

    /// Whether a reciter name is on record.
    pub fn has_bound_subject(&self) -> bool {
        self.subject_name
            .as_deref()
            .is_some_and(|n| !n.trim().is_empty())
    }

    /// Case-insensitive prefix match of a typed code against this record.
    pub fn code_matches_prefix(&self, typed: &str) -> bool {
        let typed = normalize_code(typed);
        !typed.is_empty() && normalize_code(&self.unique_code).starts_with(&typed)
    }
}

/// Trim and uppercase a unique code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Generate a random uppercase alphanumeric unique code.
pub fn generate_unique_code() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(UNIQUE_CODE_LENGTH)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect()
}

/// Trim and check a subject name, returning the cleaned value.
pub fn validate_subject_name(name: &str) -> Result<String, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("name is required".into());
    }
    if name.chars().count() > MAX_SUBJECT_NAME_LEN {
        return Err(format!(
            "name must be at most {MAX_SUBJECT_NAME_LEN} characters"
        ));
    }
    Ok(name.to_string())
}
