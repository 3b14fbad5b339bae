//! Proficiency scoring.
//!
//! Each verse scores 1 to 5 from the number of errors recorded for it. The
//! overall verdict is the *minimum* verse score: one badly recited verse is
//! not diluted by clean ones, because the recommended track depends on the
//! weakest segment. Obvious and subtle errors count the same.
//!
//! Scores are always derived at read time and never stored.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{EvaluationRecord, VerseErrorSet, VerseErrors};
use crate::verse::VerseKey;

/// Best possible verse score.
pub const MAX_SCORE: u8 = 5;

/// Worst possible verse score.
pub const MIN_SCORE: u8 = 1;

/// Lowest verse score still considered safe.
pub const SAFE_SCORE_THRESHOLD: u8 = 3;

/// Score one verse. A verse with nothing recorded scores [`MAX_SCORE`].
pub fn score_verse(errors: Option<&VerseErrorSet>) -> u8 {
    let total = errors.map_or(0, VerseErrorSet::total_errors);
    match total {
        0 => 5,
        1 => 4,
        2 => 3,
        3 => 2,
        _ => 1,
    }
}

/// Score all eight verse slots.
pub fn score_verses(verses: &VerseErrors) -> ScoreResult {
    let per_verse: BTreeMap<VerseKey, u8> = verses
        .iter()
        .map(|(key, errors)| (key, score_verse(errors)))
        .collect();

    let min = per_verse.values().copied().min().unwrap_or(MAX_SCORE);

    ScoreResult {
        per_verse,
        min_score: MinScore {
            score: min,
            label: ScoreLabel::for_score(min),
        },
    }
}

/// Score an evaluation record.
pub fn score_evaluation(record: &EvaluationRecord) -> ScoreResult {
    score_verses(&record.verses)
}

/// Presentation tone of a verdict label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Blue,
    Amber,
    Orange,
    Red,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Green => "green",
            Tone::Blue => "blue",
            Tone::Amber => "amber",
            Tone::Orange => "orange",
            Tone::Red => "red",
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative label for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreLabel {
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

impl ScoreLabel {
    /// Label for a minimum score. Anything below 2 is critical.
    pub fn for_score(score: u8) -> Self {
        match score {
            5 => ScoreLabel {
                title: "Very Good",
                description: "No errors were detected.",
                tone: Tone::Green,
            },
            4 => ScoreLabel {
                title: "Good",
                description: "Only a few minor errors.",
                tone: Tone::Blue,
            },
            3 => ScoreLabel {
                title: "Adequate",
                description: "Several errors need correcting.",
                tone: Tone::Amber,
            },
            2 => ScoreLabel {
                title: "Needs Improvement",
                description: "A fair number of significant errors.",
                tone: Tone::Orange,
            },
            _ => ScoreLabel {
                title: "Critical",
                description: "Many errors that need correcting right away.",
                tone: Tone::Red,
            },
        }
    }
}

/// Overall verdict: the minimum verse score and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinScore {
    pub score: u8,
    pub label: ScoreLabel,
}

/// Derived scores for one evaluation.
///
/// Serializes as one entry per verse key plus a `minScore` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    #[serde(flatten)]
    pub per_verse: BTreeMap<VerseKey, u8>,
    #[serde(rename = "minScore")]
    pub min_score: MinScore,
}

impl ScoreResult {
    pub fn verse(&self, key: VerseKey) -> u8 {
        self.per_verse.get(&key).copied().unwrap_or(MAX_SCORE)
    }

    pub fn label(&self) -> ScoreLabel {
        self.min_score.label
    }

    /// Verses that scored the minimum, in canonical order.
    pub fn weakest_verses(&self) -> Vec<VerseKey> {
        self.per_verse
            .iter()
            .filter(|(_, s)| **s == self.min_score.score)
            .map(|(&k, _)| k)
            .collect()
    }

    /// Verses scoring below [`SAFE_SCORE_THRESHOLD`].
    pub fn verses_below_safe(&self) -> Vec<VerseKey> {
        self.per_verse
            .iter()
            .filter(|(_, s)| **s < SAFE_SCORE_THRESHOLD)
            .map(|(&k, _)| k)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecommendedTrack;

    fn errors(obvious: usize, subtle: usize) -> VerseErrorSet {
        VerseErrorSet::from_phrases(
            (0..obvious).map(|i| format!("obvious-{i}")),
            (0..subtle).map(|i| format!("subtle-{i}")),
        )
    }

    fn record() -> EvaluationRecord {
        EvaluationRecord::new("CODE0001", "Examiner", "Activity", "Group", RecommendedTrack::Advanced)
    }

    #[test]
    fn missing_verse_scores_five() {
        assert_eq!(score_verse(None), 5);
        for key in VerseKey::ALL {
            assert_eq!(score_verses(&VerseErrors::default()).verse(key), 5);
        }
    }

    #[test]
    fn empty_set_scores_like_missing() {
        assert_eq!(score_verse(Some(&VerseErrorSet::new())), score_verse(None));
    }

    #[test]
    fn step_mapping_saturates_at_one() {
        let cases = [(0, 5), (1, 4), (2, 3), (3, 2), (4, 1), (7, 1), (18, 1)];
        for (n, expected) in cases {
            assert_eq!(score_verse(Some(&errors(n, 0))), expected, "n={n}");
        }
    }

    #[test]
    fn severity_class_does_not_weigh() {
        assert_eq!(
            score_verse(Some(&errors(1, 0))),
            score_verse(Some(&errors(0, 1)))
        );
        assert_eq!(
            score_verse(Some(&errors(3, 0))),
            score_verse(Some(&errors(1, 2)))
        );
    }

    #[test]
    fn only_count_matters_not_wording() {
        let a = VerseErrorSet::from_phrases(["x", "y"], Vec::<String>::new());
        let b = VerseErrorSet::from_phrases(["p"], ["q"]);
        assert_eq!(score_verse(Some(&a)), score_verse(Some(&b)));
    }

    #[test]
    fn overall_is_exact_minimum() {
        let r = record()
            .with_verse(VerseKey::Verse2, errors(1, 0))
            .with_verse(VerseKey::Verse4, errors(1, 1))
            .with_verse(VerseKey::Verse6, errors(0, 3));
        let result = score_evaluation(&r);
        let min = VerseKey::ALL
            .iter()
            .map(|&k| score_verse(r.verses.get(k)))
            .min()
            .unwrap();
        assert_eq!(result.min_score.score, min);
        assert_eq!(result.min_score.score, 2);
        // The mean here is 4.25, which would read as "Good".
        assert_eq!(result.label().title, "Needs Improvement");
    }

    #[test]
    fn label_depends_only_on_minimum() {
        let a = record().with_verse(VerseKey::Verse1, errors(2, 0));
        let b = record()
            .with_verse(VerseKey::Verse3, errors(0, 2))
            .with_verse(VerseKey::Verse5, errors(1, 1))
            .with_verse(VerseKey::Verse7Part1, errors(1, 0));
        let la = score_evaluation(&a).label();
        let lb = score_evaluation(&b).label();
        assert_eq!(la.title, lb.title);
        assert_eq!(la.tone, lb.tone);
        assert_eq!(la.tone, Tone::Amber);
    }

    #[test]
    fn scoring_is_idempotent() {
        let r = record().with_verse(VerseKey::Verse3, errors(2, 2));
        let first = score_evaluation(&r);
        let second = score_evaluation(&r);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn scenario_all_clean() {
        let result = score_evaluation(&record());
        assert!(result.per_verse.values().all(|&s| s == 5));
        assert_eq!(result.per_verse.len(), 8);
        assert_eq!(result.min_score.score, 5);
        assert_eq!(result.label().title, "Very Good");
        assert_eq!(result.label().tone, Tone::Green);
    }

    #[test]
    fn scenario_three_errors_in_first_verse() {
        let r = record().with_verse(VerseKey::Verse1, errors(2, 1));
        let result = score_evaluation(&r);
        assert_eq!(result.verse(VerseKey::Verse1), 2);
        for key in &VerseKey::ALL[1..] {
            assert_eq!(result.verse(*key), 5);
        }
        assert_eq!(result.min_score.score, 2);
        assert_eq!(result.label().title, "Needs Improvement");
        assert_eq!(result.label().tone, Tone::Orange);
    }

    #[test]
    fn scenario_saturated_last_segment() {
        let r = record().with_verse(VerseKey::Verse7Part2, errors(3, 2));
        let result = score_evaluation(&r);
        assert_eq!(result.verse(VerseKey::Verse7Part2), 1);
        assert_eq!(result.min_score.score, 1);
        assert_eq!(result.label().title, "Critical");
        assert_eq!(result.label().tone, Tone::Red);
        assert_eq!(result.weakest_verses(), vec![VerseKey::Verse7Part2]);
    }

    #[test]
    fn scenario_one_error_everywhere() {
        let mut r = record();
        for key in VerseKey::ALL {
            r.verses.set(key, Some(errors(1, 0)));
        }
        let result = score_evaluation(&r);
        assert!(result.per_verse.values().all(|&s| s == 4));
        assert_eq!(result.min_score.score, 4);
        assert_eq!(result.label().title, "Good");
        assert_eq!(result.label().tone, Tone::Blue);
        assert_eq!(result.weakest_verses(), VerseKey::ALL.to_vec());
    }

    #[test]
    fn out_of_range_scores_fall_back_to_critical() {
        assert_eq!(ScoreLabel::for_score(0).title, "Critical");
        assert_eq!(ScoreLabel::for_score(9).tone, Tone::Red);
        // Real results never produce them.
        for n in 0..12 {
            let s = score_verse(Some(&errors(n, 0)));
            assert!((MIN_SCORE..=MAX_SCORE).contains(&s));
        }
    }

    #[test]
    fn serializes_as_verse_map_plus_min_score() {
        let r = record().with_verse(VerseKey::Verse1, errors(1, 0));
        let json = serde_json::to_value(score_evaluation(&r)).unwrap();
        assert_eq!(json["ayat_1"], 4);
        assert_eq!(json["ayat_7_part_2"], 5);
        assert_eq!(json["minScore"]["score"], 4);
        assert_eq!(json["minScore"]["label"]["title"], "Good");
        assert_eq!(json["minScore"]["label"]["tone"], "blue");
        assert_eq!(json.as_object().unwrap().len(), 9);
    }

    #[test]
    fn verses_below_safe_threshold() {
        let r = record()
            .with_verse(VerseKey::Verse2, errors(2, 0))
            .with_verse(VerseKey::Verse5, errors(3, 0));
        let result = score_evaluation(&r);
        assert_eq!(result.verses_below_safe(), vec![VerseKey::Verse5]);
    }
}
