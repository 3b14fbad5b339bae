//! The `tilawah init` command.

use anyhow::Result;

use tilawah_core::config::SAMPLE_CONFIG;

pub fn execute() -> Result<()> {
    // Create tilawah.toml
    if std::path::Path::new("tilawah.toml").exists() {
        println!("tilawah.toml already exists, skipping.");
    } else {
        std::fs::write("tilawah.toml", SAMPLE_CONFIG)?;
        println!("Created tilawah.toml");
    }

    // Create example sheet
    std::fs::create_dir_all("sheets")?;
    let example_path = std::path::Path::new("sheets/example.toml");
    if example_path.exists() {
        println!("sheets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, example_sheet())?;
        println!("Created sheets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. List the selectable errors: tilawah catalogue");
    println!("  2. Check the sheet: tilawah validate --sheet sheets/example.toml");
    println!("  3. Record it: tilawah create --sheet sheets/example.toml");

    Ok(())
}

fn toml_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// An example sheet whose phrases come straight from the catalogue.
fn example_sheet() -> String {
    use tilawah_core::catalogue;
    use tilawah_core::{Severity, VerseKey};

    let mut sheet = String::from(
        r#"# Evaluation sheet. Verses left out are recorded as clean.
[evaluation]
subject_name = "Ahmad Yusuf"
# unique_code = "AB12CD34"   # generated when omitted
examiner = "Ustadz Fulan"
activity = "Al-Fatihah check"
group = "Ikhwan"
recommended_track = "foundation"   # foundation | advanced
"#,
    );

    let picks = [
        (VerseKey::Verse1, Severity::Obvious, 0),
        (VerseKey::Verse3, Severity::Subtle, 1),
        (VerseKey::Verse3, Severity::Obvious, 2),
    ];
    let mut current = None;
    for (key, severity, idx) in picks {
        if current != Some(key) {
            sheet.push_str(&format!("\n[verses.{key}]\n"));
            current = Some(key);
        }
        if let Some(phrase) = catalogue::options(key, severity).get(idx) {
            sheet.push_str(&format!("{severity} = [{}]\n", toml_string(phrase)));
        }
    }
    sheet
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn example_sheet_is_valid() {
        let sheet =
            tilawah_core::sheet::parse_sheet_str(&example_sheet(), Path::new("example.toml"))
                .unwrap();
        assert!(tilawah_core::sheet::validate_sheet(&sheet).is_empty());
        assert_eq!(sheet.verses.len(), 2);
    }
}
