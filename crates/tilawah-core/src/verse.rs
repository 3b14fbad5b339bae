//! The fixed verse segments an evaluation is scored on, and the two error
//! severity classes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight scoring segments of the recited text.
///
/// Verses 1 to 6 are scored whole; verse 7 is long enough that its two
/// clauses are tracked independently. Variant order is the canonical order,
/// so `Ord` and `VerseKey::ALL` agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VerseKey {
    #[serde(rename = "ayat_1")]
    Verse1,
    #[serde(rename = "ayat_2")]
    Verse2,
    #[serde(rename = "ayat_3")]
    Verse3,
    #[serde(rename = "ayat_4")]
    Verse4,
    #[serde(rename = "ayat_5")]
    Verse5,
    #[serde(rename = "ayat_6")]
    Verse6,
    /// Verse 7 up to "whom You have favored".
    #[serde(rename = "ayat_7")]
    Verse7Part1,
    /// Verse 7 from "not those who have gone astray".
    #[serde(rename = "ayat_7_part_2")]
    Verse7Part2,
}

impl VerseKey {
    /// All verse keys in canonical order.
    pub const ALL: [VerseKey; 8] = [
        VerseKey::Verse1,
        VerseKey::Verse2,
        VerseKey::Verse3,
        VerseKey::Verse4,
        VerseKey::Verse5,
        VerseKey::Verse6,
        VerseKey::Verse7Part1,
        VerseKey::Verse7Part2,
    ];

    /// The persisted key (e.g. `ayat_7_part_2`).
    pub fn as_str(&self) -> &'static str {
        match self {
            VerseKey::Verse1 => "ayat_1",
            VerseKey::Verse2 => "ayat_2",
            VerseKey::Verse3 => "ayat_3",
            VerseKey::Verse4 => "ayat_4",
            VerseKey::Verse5 => "ayat_5",
            VerseKey::Verse6 => "ayat_6",
            VerseKey::Verse7Part1 => "ayat_7",
            VerseKey::Verse7Part2 => "ayat_7_part_2",
        }
    }

    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            VerseKey::Verse1 => "Verse 1",
            VerseKey::Verse2 => "Verse 2",
            VerseKey::Verse3 => "Verse 3",
            VerseKey::Verse4 => "Verse 4",
            VerseKey::Verse5 => "Verse 5",
            VerseKey::Verse6 => "Verse 6",
            VerseKey::Verse7Part1 => "Verse 7 (part 1)",
            VerseKey::Verse7Part2 => "Verse 7 (part 2)",
        }
    }

    /// Zero-based position in canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerseKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ayat_1" | "1" => Ok(VerseKey::Verse1),
            "ayat_2" | "2" => Ok(VerseKey::Verse2),
            "ayat_3" | "3" => Ok(VerseKey::Verse3),
            "ayat_4" | "4" => Ok(VerseKey::Verse4),
            "ayat_5" | "5" => Ok(VerseKey::Verse5),
            "ayat_6" | "6" => Ok(VerseKey::Verse6),
            "ayat_7" | "ayat_7_part_1" | "7" | "7a" => Ok(VerseKey::Verse7Part1),
            "ayat_7_part_2" | "7b" => Ok(VerseKey::Verse7Part2),
            other => Err(format!("unknown verse key: {other}")),
        }
    }
}

/// Severity class of a recitation error.
///
/// The two classes are recorded separately but weigh the same when scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Clearly audible deviation (*jaliy*).
    #[serde(alias = "jaliy")]
    Obvious,
    /// Minor, hard-to-detect deviation (*khafiy*).
    #[serde(alias = "khafiy")]
    Subtle,
}

impl Severity {
    pub const ALL: [Severity; 2] = [Severity::Obvious, Severity::Subtle];

    /// The domain term for this class.
    pub fn domain_term(&self) -> &'static str {
        match self {
            Severity::Obvious => "jaliy",
            Severity::Subtle => "khafiy",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Obvious => write!(f, "obvious"),
            Severity::Subtle => write!(f, "subtle"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "obvious" | "jaliy" => Ok(Severity::Obvious),
            "subtle" | "khafiy" => Ok(Severity::Subtle),
            other => Err(format!("unknown severity class: {other}")),
        }
    }
}
