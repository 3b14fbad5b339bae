//! The `tilawah lookup` command.

use anyhow::Result;

use tilawah_core::{resolve_lookup, LookupOutcome};

use super::Context;

pub async fn execute(ctx: &Context, code: String) -> Result<()> {
    let store = ctx.open_store().await?;

    match resolve_lookup(&store, &code).await? {
        LookupOutcome::ShowResults { id } => {
            println!("results {id}");
            println!("Show with: tilawah show --id {id}");
        }
        LookupOutcome::CaptureName { id, unique_code } => {
            println!("capture_name {id} {unique_code}");
            println!("No name on record yet. Bind one with: tilawah bind --id {id} --name <NAME>");
        }
    }

    Ok(())
}
