//! Path resolution for config and ride files.

use std::path::PathBuf;

use rides_core::storage::DEFAULT_FILE_NAME;

use crate::cli::GlobalArgs;
use crate::config::{default_config_path, read_config, RidesConfig};

/// Resolve the config file path: `--config`/`RIDES_CONFIG` first, then XDG.
pub fn resolve_config_path(args: &GlobalArgs) -> anyhow::Result<PathBuf> {
    if let Some(value) = args.config.as_deref() {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file if there is one. A missing file means defaults.
///
/// An explicitly requested config that does not exist is an error.
pub fn load_config(args: &GlobalArgs) -> anyhow::Result<RidesConfig> {
    let explicit = args
        .config
        .as_deref()
        .is_some_and(|value| !value.trim().is_empty());
    let path = match resolve_config_path(args) {
        Ok(path) => path,
        // No HOME and no override: nothing to load.
        Err(_) if !explicit => return Ok(RidesConfig::default()),
        Err(err) => return Err(err),
    };

    if !path.exists() {
        if explicit {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(RidesConfig::default());
    }

    tracing::debug!(path = %path.display(), "reading config");
    read_config(&path)
}

/// Resolve the ride file: `--file`/`RIDES_FILE`, then config, then `rides.csv`.
pub fn resolve_rides_path(args: &GlobalArgs, config: &RidesConfig) -> PathBuf {
    if let Some(path) = args.file.as_deref().filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    if let Some(path) = config.rides.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_FILE_NAME)
}
