//! The `tilawah list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use tilawah_core::{score_evaluation, EvaluationRepository, ListFilter};

use super::Context;

pub async fn execute(ctx: &Context, filter: ListFilter) -> Result<()> {
    let store = ctx.open_store().await?;
    let records = store.list(&filter).await?;

    if records.is_empty() {
        println!("No evaluations found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Code", "Name", "Examiner", "Activity", "Group", "Track", "Score", "Created", "Id",
    ]);

    for record in &records {
        let scores = score_evaluation(record);
        table.add_row(vec![
            Cell::new(&record.unique_code),
            Cell::new(record.subject_name.as_deref().unwrap_or("-")),
            Cell::new(&record.examiner),
            Cell::new(&record.activity),
            Cell::new(&record.group),
            Cell::new(record.recommended_track.title()),
            Cell::new(format!(
                "{} {}",
                scores.min_score.score,
                scores.label().title
            )),
            Cell::new(record.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(record.id),
        ]);
    }

    println!("{table}");
    println!("{} evaluation(s)", records.len());
    Ok(())
}
