//! The `tilawah catalogue` command.

use anyhow::Result;

use tilawah_core::catalogue;
use tilawah_core::{Severity, VerseKey};

pub fn execute(verse: Option<String>) -> Result<()> {
    let only = verse
        .map(|v| v.parse::<VerseKey>().map_err(|e| anyhow::anyhow!(e)))
        .transpose()?;

    for entry in catalogue::entries() {
        if only.is_some_and(|k| k != entry.key) {
            continue;
        }
        println!("{} [{}]", entry.label, entry.key);
        println!("  {}", entry.text);
        for severity in Severity::ALL {
            println!("  {} ({}):", severity, severity.domain_term());
            for phrase in entry.options(severity) {
                println!("    - {phrase}");
            }
        }
        println!();
    }

    Ok(())
}
