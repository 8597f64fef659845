//! Config file loading

use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::domain::UserConfig;

/// File names tried, in order, when no config path is given.
pub const CONFIG_CANDIDATES: [&str; 4] =
    ["apimodel.toml", ".apimodel.toml", "apimodel.yaml", "apimodel.yml"];

/// Load the user override config.
///
/// An explicit `config_path` must exist and parse. Without one, the first
/// of [`CONFIG_CANDIDATES`] found in `dir` is used; a discovered file that
/// fails to parse is logged and ignored. No file at all yields the empty
/// config.
pub fn load_config(dir: &Path, config_path: Option<&Path>) -> Result<UserConfig, ConfigError> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(dir),
    };

    let Some(config_file) = discovered else {
        tracing::debug!("no user config file found in {}", dir.display());
        return Ok(UserConfig::default());
    };

    let content = match fs::read_to_string(&config_file) {
        Ok(content) => content,
        Err(source) => return Err(ConfigError::Read { path: config_file, source }),
    };

    match parse_config(&content, &config_file) {
        Ok(cfg) => {
            tracing::info!("loaded user config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) if !config_path_provided => {
            tracing::warn!("Ignoring auto-discovered config {}: {}", config_file.display(), e);
            Ok(UserConfig::default())
        }
        Err(e) => Err(e),
    }
}

fn parse_config(content: &str, config_file: &Path) -> Result<UserConfig, ConfigError> {
    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
    let parse_err = |reason: String| ConfigError::Parse { path: config_file.to_path_buf(), reason };

    match ext.as_str() {
        "toml" => toml::from_str(content).map_err(|e| parse_err(e.to_string())),
        "yaml" | "yml" => {
            // An empty YAML document is a valid, empty config.
            if content.trim().is_empty() {
                return Ok(UserConfig::default());
            }
            serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))
        }
        "json" => serde_json::from_str(content).map_err(|e| parse_err(e.to_string())),
        other => Err(ConfigError::UnsupportedExtension {
            path: config_file.to_path_buf(),
            extension: other.to_string(),
        }),
    }
}

fn discover_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES.iter().map(|candidate| dir.join(candidate)).find(|path| path.exists())
}
