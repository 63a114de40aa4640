//! Application context for the Nutri CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file so handlers
//! don't thread both around.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use nutri_core::{Ledger, LedgerConfig};

use crate::cli::Cli;
use crate::config::{default_config_path, load_config, NutriConfig};
use crate::ui::UiContext;

pub struct AppContext<'a> {
    cli: &'a Cli,
    file_config: OnceCell<NutriConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            file_config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Config file location: `--config`/`NUTRI_CONFIG`, else the XDG default.
    pub fn config_path(&self) -> anyhow::Result<PathBuf> {
        match self.cli.config {
            Some(ref path) => Ok(PathBuf::from(path)),
            None => default_config_path(),
        }
    }

    /// The config file contents, loaded on first use.
    pub fn file_config(&self) -> anyhow::Result<&NutriConfig> {
        self.file_config
            .get_or_try_init(|| load_config(&self.config_path()?))
    }

    /// Ledger settings after applying command-line overrides to the file.
    pub fn ledger_config(&self) -> anyhow::Result<LedgerConfig> {
        let mut config = self.file_config()?.tracker.clone();
        if let Some(mode) = self.cli.mode {
            config.matching_mode = mode;
        }
        if let Some(goal) = self.cli.goal {
            config.daily_goal = goal;
        }
        if let Some(calories) = self.cli.default_calories {
            config.default_calories = calories;
        }
        if let Some(ratio) = self.cli.overage_threshold {
            config.overage_threshold = Some(ratio);
        }
        config.validate()?;
        Ok(config)
    }

    /// A fresh, empty ledger for this invocation.
    pub fn new_ledger(&self) -> anyhow::Result<Ledger> {
        let config = self.ledger_config()?;
        tracing::debug!(
            mode = %config.matching_mode,
            goal = config.daily_goal,
            "starting ledger"
        );
        Ok(Ledger::new(config)?)
    }

    pub fn timezone(&self) -> anyhow::Result<Option<chrono_tz::Tz>> {
        self.file_config()?.timezone()
    }

    pub fn ui_context(&self) -> UiContext {
        UiContext::from_env(
            self.cli.json,
            self.cli.format,
            self.cli.no_color,
            self.cli.ascii,
        )
    }
}
