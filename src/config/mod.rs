//! User config loading and merging
//!
//! Builds the [`UserConfig`] from a config file, `APIMODEL_*` environment
//! variables and CLI flags, with precedence CLI > Env > File. Fields left
//! unset by every layer fall back to the built-in model defaults.

pub mod env;
pub mod error;
pub mod loader;
pub mod merge;

use std::path::Path;

use crate::domain::UserConfig;

pub use env::apply_env_overrides;
pub use error::ConfigError;
pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};

/// Resolve the effective user config against the process environment.
pub fn resolve_user_config(
    dir: &Path,
    config_path: Option<&Path>,
    use_env: bool,
    cli: &CliOverrides,
) -> Result<UserConfig, ConfigError> {
    resolve_with_env(dir, config_path, use_env, cli, &|key| std::env::var(key).ok())
}

fn resolve_with_env(
    dir: &Path,
    config_path: Option<&Path>,
    use_env: bool,
    cli: &CliOverrides,
    env_lookup: &impl Fn(&str) -> Option<String>,
) -> Result<UserConfig, ConfigError> {
    let mut config = load_config(dir, config_path)?;
    if use_env {
        apply_env_overrides(&mut config, env_lookup)?;
    }
    Ok(merge_cli_with_config(config, cli))
}
