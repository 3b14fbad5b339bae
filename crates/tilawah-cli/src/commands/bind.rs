//! The `tilawah bind` command.

use anyhow::Result;
use uuid::Uuid;

use tilawah_core::bind_and_show;
use tilawah_report::text::render_text;
use tilawah_report::ResultsView;

use super::Context;

pub async fn execute(ctx: &Context, id: Uuid, name: String) -> Result<()> {
    let store = ctx.open_store().await?;
    let record = bind_and_show(&store, id, &name).await?;
    print!("{}", render_text(&ResultsView::from_record(&record)));
    Ok(())
}
