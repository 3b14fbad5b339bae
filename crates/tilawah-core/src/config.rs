//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level tilawah configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilawahConfig {
    /// Directory holding one JSON file per evaluation.
    #[serde(default = "default_store_dir")]
    pub store_dir: PathBuf,
    /// Address the HTTP service listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Activity label applied when a sheet names none.
    #[serde(default)]
    pub default_activity: Option<String>,
    /// Where `tilawah report` writes files when no output path is given.
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
}

fn default_store_dir() -> PathBuf {
    PathBuf::from("./tilawah-data")
}
fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}
fn default_report_dir() -> PathBuf {
    PathBuf::from("./tilawah-reports")
}

impl Default for TilawahConfig {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            bind_address: default_bind_address(),
            default_activity: None,
            report_dir: default_report_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        // Substituted values are not expanded again
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Apply `TILAWAH_*` overrides using `lookup` to read variables.
fn apply_overrides(config: &mut TilawahConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(dir) = lookup("TILAWAH_STORE_DIR").filter(|v| !v.is_empty()) {
        config.store_dir = PathBuf::from(dir);
    }
    if let Some(addr) = lookup("TILAWAH_BIND_ADDRESS").filter(|v| !v.is_empty()) {
        config.bind_address = addr;
    }
}

/// Load config from an explicit path, or search the well-known paths.
///
/// Search order when `path` is `None`:
/// 1. `tilawah.toml` in the current directory
/// 2. `~/.config/tilawah/config.toml`
///
/// Environment variable overrides: `TILAWAH_STORE_DIR`, `TILAWAH_BIND_ADDRESS`.
pub fn load_config_from(path: Option<&Path>) -> Result<TilawahConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("tilawah.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => TilawahConfig::default(),
    };

    apply_overrides(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

/// Parse a config string and expand `${VAR}` references in its values.
pub fn parse_config_str(content: &str) -> Result<TilawahConfig> {
    let mut config: TilawahConfig = toml::from_str(content)?;
    config.store_dir = resolve_path(&config.store_dir);
    config.report_dir = resolve_path(&config.report_dir);
    config.bind_address = resolve_env_vars(&config.bind_address);
    config.default_activity = config
        .default_activity
        .as_deref()
        .map(resolve_env_vars)
        .filter(|a| !a.trim().is_empty());
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("tilawah"))
}

/// Sample config written by `tilawah init`.
pub const SAMPLE_CONFIG: &str = r#"# tilawah configuration

# Directory holding one JSON file per evaluation.
store_dir = "./tilawah-data"

# Address for `tilawah serve`.
bind_address = "127.0.0.1:8080"

# Activity label used when a sheet does not name one.
# default_activity = "Weekly halaqah"

# Default output directory for `tilawah report`.
report_dir = "./tilawah-reports"
"#;
