//! Application context shared by both ride applications.
//!
//! Bundles the parsed global flags with a lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use rides_core::CsvRideStore;

use crate::cli::GlobalArgs;
use crate::config::RidesConfig;
use crate::ui::{UiContext, UiFlags};

use super::resolver::{load_config, resolve_rides_path};

/// Application context that bundles CLI args with configuration.
///
/// Avoids reloading the config and threading several parameters through
/// every handler.
#[derive(Debug)]
pub struct AppContext<'a> {
    args: &'a GlobalArgs,
    config: OnceCell<RidesConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(args: &'a GlobalArgs) -> Self {
        Self {
            args,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.args.quiet
    }

    /// Get the configuration, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&RidesConfig> {
        self.config.get_or_try_init(|| load_config(self.args))
    }

    /// Path of the shared ride file.
    pub fn rides_path(&self) -> anyhow::Result<PathBuf> {
        Ok(resolve_rides_path(self.args, self.config()?))
    }

    /// Open the shared ride file. Nothing is created until the first save.
    pub fn open_store(&self) -> anyhow::Result<CsvRideStore> {
        let path = self.rides_path()?;
        tracing::debug!(path = %path.display(), "using ride file");
        Ok(CsvRideStore::new(path))
    }

    /// Build the UI context from flags, config and the terminal.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> anyhow::Result<UiContext> {
        let config = self.config()?;
        Ok(UiContext::from_env(UiFlags {
            json,
            format,
            no_color: self.args.no_color || !config.ui.color,
            ascii: self.args.ascii || config.ui.ascii,
        }))
    }
}
