//! The `tilawah validate` command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use tilawah_core::sheet::{parse_sheet, validate_sheet};

/// Sheet files to check: the path itself, or every `.toml` in a directory.
pub fn sheet_paths(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(path)
        .with_context(|| format!("failed to read directory: {}", path.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("toml"))
        .collect();
    paths.sort();
    Ok(paths)
}

pub fn execute(sheet_path: PathBuf) -> Result<()> {
    let mut total_issues = 0;

    for path in sheet_paths(&sheet_path)? {
        let sheet = parse_sheet(&path)?;
        let errors: usize = sheet
            .verses
            .values()
            .map(|v| v.obvious.len() + v.subtle.len())
            .sum();
        println!("Sheet: {} ({} errors selected)", path.display(), errors);

        let issues = validate_sheet(&sheet);
        for issue in &issues {
            let prefix = issue
                .verse
                .map(|key| format!("  [{key}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} ERROR: {}", issue.message);
        }
        total_issues += issues.len();
    }

    if total_issues == 0 {
        println!("All sheets valid.");
        Ok(())
    } else {
        anyhow::bail!("{total_issues} issue(s) found")
    }
}
