//! The `tilawah edit` command.

use std::path::PathBuf;

use anyhow::Result;
use uuid::Uuid;

use tilawah_core::sheet::{parse_sheet, validate_sheet};
use tilawah_core::EvaluationRepository;
use tilawah_report::text::render_text;
use tilawah_report::ResultsView;

use super::{load_record, Context};

pub async fn execute(ctx: &Context, id: Uuid, sheet_path: PathBuf) -> Result<()> {
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
            "{} has {} issue(s); evaluation {id} was not changed",
            sheet_path.display(),
            issues.len()
        );
    }

    let store = ctx.open_store().await?;
    let mut record = load_record(&store, id).await?;
    sheet.apply_to(&mut record, config.default_activity.as_deref());
    store.update(record.clone()).await?;

    println!("Updated evaluation {id}");
    print!("{}", render_text(&ResultsView::from_record(&record)));
    Ok(())
}
