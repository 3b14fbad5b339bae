//! The `tilawah report` command.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use uuid::Uuid;

use tilawah_report::html::write_html_report;
use tilawah_report::text::render_text;
use tilawah_report::ResultsView;

use super::{load_record, Context};

pub async fn execute(
    ctx: &Context,
    id: Uuid,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = ctx.config()?;
    let store = ctx.open_store().await?;
    let record = load_record(&store, id).await?;
    let view = ResultsView::from_record(&record);

    let extension = match format.as_str() {
        "json" => "json",
        "html" => "html",
        "text" => "txt",
        other => anyhow::bail!("unknown format: {other} (expected json, html or text)"),
    };
    let path = output.unwrap_or_else(|| config.report_dir.join(view.filename(extension)));

    match extension {
        "json" => view.save_json(&path)?,
        "html" => write_html_report(&view, &path)?,
        _ => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, render_text(&view))
                .with_context(|| format!("failed to write report to {}", path.display()))?;
        }
    }

    println!("Report written to {}", path.display());
    Ok(())
}
