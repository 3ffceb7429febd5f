//! CLI configuration.
//!
//! An optional `config.toml` under the XDG config directory can set the
//! data directory; the `--data-dir` flag (or `NUTRILOG_DATA_DIR`) overrides
//! it, and the XDG data directory is the fallback.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct NutrilogConfig {
    pub ledger: LedgerSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerSection {
    pub data_dir: String,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("nutrilog"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("nutrilog"))
}

pub fn read_config(path: &Path) -> anyhow::Result<NutrilogConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Resolve the data directory: flag override, then config file, then the
/// XDG default.
pub fn resolve_data_dir(override_dir: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(config_path) = default_config_path() {
        if config_path.exists() {
            let config = read_config(&config_path)?;
            return Ok(PathBuf::from(config.ledger.data_dir));
        }
    }
    default_data_dir()
}

fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("nutrilog"));
        }
    }
    Ok(home_dir()?.join(".config").join("nutrilog"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_override_wins() {
        let dir = resolve_data_dir(Some("/tmp/nutrilog-test")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/nutrilog-test"));
    }

    #[test]
    fn test_config_parses() {
        let config: NutrilogConfig =
            toml::from_str("[ledger]\ndata_dir = \"/srv/nutrilog\"\n").unwrap();
        assert_eq!(config.ledger.data_dir, "/srv/nutrilog");
    }
}
