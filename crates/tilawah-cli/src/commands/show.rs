//! The `tilawah show` command.

use anyhow::Result;
use uuid::Uuid;

use tilawah_report::text::render_text;
use tilawah_report::ResultsView;

use super::{load_record, Context};

pub async fn execute(ctx: &Context, id: Uuid) -> Result<()> {
    let store = ctx.open_store().await?;
    let record = load_record(&store, id).await?;
    print!("{}", render_text(&ResultsView::from_record(&record)));
    Ok(())
}
