use std::path::{Path, PathBuf};

use nutri_core::LedgerConfig;
use serde::{Deserialize, Serialize};

/// On-disk configuration (`config.toml`).
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NutriConfig {
    #[serde(default)]
    pub tracker: LedgerConfig,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    /// IANA timezone used to display entry times (local time when unset)
    pub timezone: Option<String>,
}

impl NutriConfig {
    /// Parse the configured timezone, if any.
    pub fn timezone(&self) -> anyhow::Result<Option<chrono_tz::Tz>> {
        self.ui
            .timezone
            .as_deref()
            .map(|name| {
                name.parse::<chrono_tz::Tz>()
                    .map_err(|e| anyhow::anyhow!("Invalid timezone \"{}\": {}", name, e))
            })
            .transpose()
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Read the config at `path`, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<NutriConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(NutriConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<NutriConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    let config: NutriConfig = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))?;
    config
        .tracker
        .validate()
        .map_err(|e| anyhow::anyhow!("Config {}: {}", path.display(), e))?;
    Ok(config)
}

pub fn write_config(path: &Path, config: &NutriConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("nutri"));
        }
    }
    Ok(home_dir()?.join(".config").join("nutri"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
