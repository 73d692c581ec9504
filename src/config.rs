use crate::error::{DonorscoreError, Result};
use crate::types::config::DonorscoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "donorscore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".donorscore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/donorscore/config.toml";

pub fn load_config(root: &Path) -> Result<DonorscoreConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges global, project and local files in that order; later files win
/// key by key. Missing files are skipped, so no files yields the defaults.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<DonorscoreConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: DonorscoreConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| DonorscoreError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config file");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| DonorscoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

/// Resolves the store location against the project root unless absolute.
pub fn storage_path(root: &Path, cfg: &DonorscoreConfig) -> PathBuf {
    let candidate = PathBuf::from(cfg.storage_path());
    if candidate.is_absolute() {
        candidate
    } else {
        root.join(candidate)
    }
}
