//! The `tilawah serve` command.

use std::sync::Arc;

use anyhow::Result;

use tilawah_server::{serve, AppState};

use super::Context;

pub async fn execute(ctx: &Context, bind: Option<String>) -> Result<()> {
    let config = ctx.config()?;
    let store = ctx.open_store().await?;
    let addr = bind.unwrap_or(config.bind_address);

    tracing::info!("serving evaluations from {}", config.store_dir.display());
    serve(&addr, AppState::new(Arc::new(store))).await
}
