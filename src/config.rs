use crate::error::{LeaderboardError, Result};
use crate::types::config::LeaderboardConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "telcoboard.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/telcoboard/config.toml";

/// Load the optional layered configuration: the user-global file overlaid
/// by `telcoboard.toml` in the working directory. Returns `None` when
/// neither file exists; the tool then runs on built-in defaults.
pub fn load_config(cwd: &Path) -> Result<Option<LeaderboardConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(cwd, global.as_deref())
}

pub(crate) fn load_config_with_global(
    cwd: &Path,
    global_path: Option<&Path>,
) -> Result<Option<LeaderboardConfig>> {
    let local_path = cwd.join(DEFAULT_CONFIG_FILE);
    let global_exists = global_path.map(Path::exists).unwrap_or(false);
    if !local_path.exists() && !global_exists {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &local_path)?;

    let cfg: LeaderboardConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| LeaderboardError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| LeaderboardError::ConfigParse(format!("{}: {}", path.display(), e)))
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
