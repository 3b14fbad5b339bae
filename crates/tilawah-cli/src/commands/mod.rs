pub mod bind;
pub mod catalogue;
pub mod create;
pub mod edit;
pub mod init;
pub mod list;
pub mod lookup;
pub mod report;
pub mod serve;
pub mod show;
pub mod validate;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use uuid::Uuid;

use tilawah_core::config::load_config_from;
use tilawah_core::{EvaluationRecord, EvaluationRepository, JsonDirStore, TilawahConfig};

/// Global options shared by every command.
pub struct Context {
    pub config_path: Option<PathBuf>,
    pub store_dir: Option<PathBuf>,
}

impl Context {
    pub fn config(&self) -> Result<TilawahConfig> {
        let mut config = load_config_from(self.config_path.as_deref())?;
        if let Some(dir) = &self.store_dir {
            config.store_dir = dir.clone();
        }
        Ok(config)
    }

    pub async fn open_store(&self) -> Result<JsonDirStore> {
        let config = self.config()?;
        JsonDirStore::open(&config.store_dir)
            .await
            .with_context(|| format!("failed to open store: {}", config.store_dir.display()))
    }
}

/// Fetch a record or fail with a readable message.
pub async fn load_record(store: &dyn EvaluationRepository, id: Uuid) -> Result<EvaluationRecord> {
    store
        .get(id)
        .await?
        .ok_or_else(|| tilawah_core::EvaluationError::NotFound(id).into())
}
