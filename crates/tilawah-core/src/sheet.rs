//! TOML evaluation sheet parser.
//!
//! An evaluation sheet is how an examiner submits a new evaluation: the
//! session details plus, per verse, the catalogue phrases that were heard.
//! Verses not listed on the sheet are recorded as clean.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalogue;
use crate::error::EvaluationError;
use crate::model::{
    generate_unique_code, normalize_code, validate_subject_name, EvaluationRecord,
    RecommendedTrack, VerseErrorSet, VerseErrors,
};
use crate::verse::{Severity, VerseKey};

/// Intermediate TOML structure for parsing sheet files.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSheet {
    evaluation: TomlHeader,
    #[serde(default)]
    verses: BTreeMap<String, TomlVerse>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlHeader {
    #[serde(default)]
    subject_name: Option<String>,
    #[serde(default)]
    unique_code: Option<String>,
    examiner: String,
    #[serde(default)]
    activity: Option<String>,
    #[serde(default)]
    group: String,
    recommended_track: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlVerse {
    #[serde(default, alias = "jaliy")]
    obvious: Vec<String>,
    #[serde(default, alias = "khafiy")]
    subtle: Vec<String>,
}

/// Phrases selected for one verse on a sheet, as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetVerse {
    pub obvious: Vec<String>,
    pub subtle: Vec<String>,
}

impl SheetVerse {
    pub fn phrases(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::Obvious => &self.obvious,
            Severity::Subtle => &self.subtle,
        }
    }
}

/// A parsed evaluation sheet.
#[derive(Debug, Clone)]
pub struct EvaluationSheet {
    pub subject_name: Option<String>,
    pub unique_code: Option<String>,
    pub examiner: String,
    pub activity: Option<String>,
    pub group: String,
    pub recommended_track: RecommendedTrack,
    pub verses: BTreeMap<VerseKey, SheetVerse>,
}

impl EvaluationSheet {
    /// Build the record this sheet describes. Generates a unique code when
    /// the sheet has none and falls back to `default_activity` when the sheet
    /// names no activity. Call [`validate_sheet`] first.
    pub fn into_record(self, default_activity: Option<&str>) -> EvaluationRecord {
        let mut record = EvaluationRecord::new(
            generate_unique_code(),
            "",
            "",
            "",
            self.recommended_track,
        );
        self.apply_to(&mut record, default_activity);
        record
    }

    /// Overwrite `record` with this sheet (an examiner edit). The id and
    /// creation time never change. The code and subject name are kept unless
    /// the sheet sets them. Verses missing from the sheet become clean.
    pub fn apply_to(self, record: &mut EvaluationRecord, default_activity: Option<&str>) {
        if let Some(code) = self.unique_code.filter(|c| !c.trim().is_empty()) {
            record.unique_code = normalize_code(&code);
        }
        if let Some(name) = self
            .subject_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
        {
            record.subject_name = Some(name);
        }
        let activity = self
            .activity
            .filter(|a| !a.trim().is_empty())
            .or_else(|| default_activity.map(str::to_string))
            .unwrap_or_default();

        record.examiner = self.examiner.trim().to_string();
        record.activity = activity.trim().to_string();
        record.group = self.group.trim().to_string();
        record.recommended_track = self.recommended_track;
        record.verses = VerseErrors::default();
        for (key, verse) in self.verses {
            record
                .verses
                .set(key, Some(VerseErrorSet::from_phrases(verse.obvious, verse.subtle)));
        }
    }
}

/// Parse a single TOML sheet file.
pub fn parse_sheet(path: &Path) -> Result<EvaluationSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read evaluation sheet: {}", path.display()))?;

    parse_sheet_str(&content, path)
}

/// Parse a TOML string into an `EvaluationSheet` (useful for testing).
pub fn parse_sheet_str(content: &str, source_path: &Path) -> Result<EvaluationSheet> {
    let parsed: TomlSheet = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let recommended_track: RecommendedTrack = parsed
        .evaluation
        .recommended_track
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{}", e))?;

    let mut verses = BTreeMap::new();
    for (name, v) in parsed.verses {
        let key: VerseKey = name
            .parse()
            .map_err(|_: String| EvaluationError::UnknownVerse(name.clone()))?;
        let verse = SheetVerse {
            obvious: v.obvious,
            subtle: v.subtle,
        };
        // `ayat_7` and `7a` name the same verse
        if verses.insert(key, verse).is_some() {
            anyhow::bail!("verse {key} listed more than once");
        }
    }

    Ok(EvaluationSheet {
        subject_name: parsed.evaluation.subject_name,
        unique_code: parsed.evaluation.unique_code,
        examiner: parsed.evaluation.examiner,
        activity: parsed.evaluation.activity,
        group: parsed.evaluation.group,
        recommended_track,
        verses,
    })
}

/// A problem found while validating a sheet.
#[derive(Debug, Clone)]
pub struct SheetIssue {
    /// The verse the issue concerns (if applicable).
    pub verse: Option<VerseKey>,
    /// Issue message.
    pub message: String,
}

/// Validate a sheet against the catalogue. An empty result means the sheet
/// can be recorded.
pub fn validate_sheet(sheet: &EvaluationSheet) -> Vec<SheetIssue> {
    let mut issues = Vec::new();

    if sheet.examiner.trim().is_empty() {
        issues.push(SheetIssue {
            verse: None,
            message: "examiner is required".into(),
        });
    }

    if sheet.group.trim().is_empty() {
        issues.push(SheetIssue {
            verse: None,
            message: "group is required".into(),
        });
    }

    if let Some(name) = &sheet.subject_name {
        if let Err(e) = validate_subject_name(name) {
            issues.push(SheetIssue {
                verse: None,
                message: format!("subject_name: {e}"),
            });
        }
    }

    if let Some(code) = &sheet.unique_code {
        let code = code.trim();
        if code.is_empty() {
            issues.push(SheetIssue {
                verse: None,
                message: "unique_code is empty; omit it to generate one".into(),
            });
        } else if !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            issues.push(SheetIssue {
                verse: None,
                message: format!("unique_code '{code}' may only contain letters, digits and '-'"),
            });
        }
    }

    for (key, verse) in &sheet.verses {
        for severity in Severity::ALL {
            let mut seen = HashSet::new();
            for phrase in verse.phrases(severity) {
                if !seen.insert(phrase.as_str()) {
                    issues.push(SheetIssue {
                        verse: Some(*key),
                        message: format!("duplicate {severity} phrase: {phrase}"),
                    });
                } else if !catalogue::contains(*key, severity, phrase) {
                    let err = EvaluationError::UnknownPhrase {
                        verse: *key,
                        severity,
                        phrase: phrase.clone(),
                    };
                    issues.push(SheetIssue {
                        verse: Some(*key),
                        message: err.to_string(),
                    });
                }
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sheet_toml(verse_block: &str) -> String {
        format!(
            r#"
[evaluation]
subject_name = "Ahmad Yusuf"
examiner = "Ustadz Fulan"
activity = "Al-Fatihah check"
group = "Ikhwan"
recommended_track = "foundation"

{verse_block}
"#
        )
    }

    fn quoted(s: &str) -> String {
        format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
    }

    fn parse(content: &str) -> Result<EvaluationSheet> {
        parse_sheet_str(content, &PathBuf::from("test.toml"))
    }

    #[test]
    fn parse_valid_sheet() {
        let obvious = catalogue::options(VerseKey::Verse1, Severity::Obvious)[0];
        let subtle = catalogue::options(VerseKey::Verse1, Severity::Subtle)[1];
        let content = sheet_toml(&format!(
            "[verses.ayat_1]\nobvious = [{}]\nsubtle = [{}]\n",
            quoted(obvious),
            quoted(subtle)
        ));
        let sheet = parse(&content).unwrap();
        assert_eq!(sheet.examiner, "Ustadz Fulan");
        assert_eq!(sheet.recommended_track, RecommendedTrack::Foundation);
        assert_eq!(sheet.verses.len(), 1);
        assert!(validate_sheet(&sheet).is_empty());

        let record = sheet.into_record(None);
        assert_eq!(record.verses.get(VerseKey::Verse1).unwrap().total_errors(), 2);
        assert!(record.verses.get(VerseKey::Verse2).is_none());
        assert_eq!(record.subject_name.as_deref(), Some("Ahmad Yusuf"));
        assert_eq!(record.unique_code.len(), crate::model::UNIQUE_CODE_LENGTH);
    }

    #[test]
    fn accepts_domain_terms_for_classes() {
        let phrase = catalogue::options(VerseKey::Verse4, Severity::Subtle)[0];
        let content = sheet_toml(&format!("[verses.ayat_4]\nkhafiy = [{}]\n", quoted(phrase)));
        let sheet = parse(&content).unwrap();
        assert_eq!(sheet.verses[&VerseKey::Verse4].subtle.len(), 1);
        assert!(validate_sheet(&sheet).is_empty());
    }

    #[test]
    fn unknown_verse_key_fails_parse() {
        let content = sheet_toml("[verses.ayat_9]\nobvious = []\n");
        let err = parse(&content).unwrap_err();
        assert_eq!(err.to_string(), "unknown verse key: ayat_9");
    }

    #[test]
    fn unknown_track_fails_parse() {
        let content = sheet_toml("").replace("foundation", "expert");
        assert!(parse(&content).is_err());
    }

    #[test]
    fn flags_phrases_outside_catalogue() {
        let content = sheet_toml("[verses.ayat_2]\nobvious = [\"mumbled\"]\n");
        let sheet = parse(&content).unwrap();
        let issues = validate_sheet(&sheet);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].verse, Some(VerseKey::Verse2));
        assert_eq!(
            issues[0].message,
            "'mumbled' is not a listed obvious error for ayat_2"
        );
    }

    #[test]
    fn misspelled_class_fails_parse() {
        let phrases: Vec<String> = catalogue::options(VerseKey::Verse1, Severity::Obvious)
            .iter()
            .take(4)
            .map(|p| quoted(p))
            .collect();
        let content = sheet_toml(&format!("[verses.ayat_1]\nobvius = [{}]\n", phrases.join(", ")));
        let err = parse(&content).unwrap_err();
        assert!(format!("{err:#}").contains("obvius"));
    }

    #[test]
    fn unknown_header_field_fails_parse() {
        let content = sheet_toml("").replace("examiner =", "examiner_name = \"x\"\nexaminer =");
        assert!(parse(&content).is_err());
    }

    #[test]
    fn same_verse_under_two_names_fails_parse() {
        let obvious = catalogue::options(VerseKey::Verse7Part1, Severity::Obvious);
        let content = sheet_toml(&format!(
            "[verses.ayat_7]\nobvious = [{}, {}]\n\n[verses.7a]\nobvious = [{}]\n",
            quoted(obvious[0]),
            quoted(obvious[1]),
            quoted(obvious[2])
        ));
        let err = parse(&content).unwrap_err();
        assert!(err.to_string().contains("listed more than once"));
    }

    #[test]
    fn flags_phrase_in_wrong_class() {
        let obvious = catalogue::options(VerseKey::Verse6, Severity::Obvious)[0];
        let content = sheet_toml(&format!("[verses.ayat_6]\nsubtle = [{}]\n", quoted(obvious)));
        let issues = validate_sheet(&parse(&content).unwrap());
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn flags_duplicates_and_missing_fields() {
        let phrase = catalogue::options(VerseKey::Verse3, Severity::Obvious)[0];
        let content = sheet_toml(&format!(
            "[verses.ayat_3]\nobvious = [{0}, {0}]\n",
            quoted(phrase)
        ))
        .replace("examiner = \"Ustadz Fulan\"", "examiner = \" \"");
        let issues = validate_sheet(&parse(&content).unwrap());
        assert!(issues.iter().any(|i| i.message.contains("duplicate")));
        assert!(issues.iter().any(|i| i.message == "examiner is required"));
    }

    #[test]
    fn edit_keeps_identity_and_replaces_verses() {
        let phrase = catalogue::options(VerseKey::Verse1, Severity::Obvious)[0];
        let original = parse(&sheet_toml(&format!(
            "[verses.ayat_1]\nobvious = [{}]\n",
            quoted(phrase)
        )))
        .unwrap()
        .into_record(None);

        let subtle = catalogue::options(VerseKey::Verse5, Severity::Subtle)[0];
        let edit = parse(&format!(
            r#"
[evaluation]
examiner = "Ustadzah A"
group = "Ikhwan"
recommended_track = "advanced"

[verses.ayat_5]
subtle = [{}]
"#,
            quoted(subtle)
        ))
        .unwrap();

        let mut edited = original.clone();
        edit.apply_to(&mut edited, Some("Weekly halaqah"));
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.created_at, original.created_at);
        assert_eq!(edited.unique_code, original.unique_code);
        assert_eq!(edited.subject_name.as_deref(), Some("Ahmad Yusuf"));
        assert_eq!(edited.examiner, "Ustadzah A");
        assert_eq!(edited.activity, "Weekly halaqah");
        assert_eq!(edited.recommended_track, RecommendedTrack::Advanced);
        assert!(edited.verses.get(VerseKey::Verse1).is_none());
        assert_eq!(edited.verses.get(VerseKey::Verse5).unwrap().total_errors(), 1);
    }

    #[test]
    fn default_activity_and_given_code() {
        let content = r#"
[evaluation]
unique_code = "kdg-01"
examiner = "Ustadzah A"
group = "Akhwat"
recommended_track = "HITS Lanjutan"
"#;
        let sheet = parse(content).unwrap();
        assert!(validate_sheet(&sheet).is_empty());
        let record = sheet.into_record(Some("Weekly halaqah"));
        assert_eq!(record.unique_code, "KDG-01");
        assert_eq!(record.activity, "Weekly halaqah");
        assert_eq!(record.recommended_track, RecommendedTrack::Advanced);
        assert!(!record.has_bound_subject());
    }
}
