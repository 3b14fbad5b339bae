//! The `tilawah create` command.

use std::path::PathBuf;

use anyhow::Result;

use tilawah_core::sheet::{parse_sheet, validate_sheet};
use tilawah_core::{score_evaluation, EvaluationRepository};

use super::Context;

pub async fn execute(ctx: &Context, sheet_path: PathBuf) -> Result<()> {
    let config = ctx.config()?;
    let sheet = parse_sheet(&sheet_path)?;

    let issues = validate_sheet(&sheet);
    if !issues.is_empty() {
        for issue in &issues {
            let prefix = issue
                .verse
                .map(|key| format!("[{key}] "))
                .unwrap_or_default();
            eprintln!("  {prefix}{}", issue.message);
        }
        anyhow::bail!(
            "{} has {} issue(s); nothing was recorded",
            sheet_path.display(),
            issues.len()
        );
    }

    let store = ctx.open_store().await?;
    let record = sheet.into_record(config.default_activity.as_deref());
    let record = store.insert(record).await?;
    let scores = score_evaluation(&record);

    println!("Created evaluation {}", record.id);
    println!("  Code:    {}", record.unique_code);
    println!(
        "  Overall: {}/5 {}",
        scores.min_score.score,
        scores.label().title
    );

    Ok(())
}
