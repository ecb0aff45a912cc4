use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::api::{ClientConfig, DEFAULT_API_BASE, DEFAULT_PAGE_SIZE};
use crate::cli::Cli;

const APP_SENTINEL: &str = "hn-pager";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TICK_RATE_MS: u64 = 250;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(rename = "_app")]
    pub app: String,

    #[serde(default)]
    pub page_size: Option<usize>,

    #[serde(default)]
    pub api_base: Option<String>,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default)]
    pub tick_rate_ms: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: APP_SENTINEL.to_string(),
            page_size: None,
            api_base: None,
            request_timeout_secs: None,
            tick_rate_ms: None,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.app != APP_SENTINEL {
            bail!(
                "Settings file appears to belong to another application (expected _app = '{}', found '{}')",
                APP_SENTINEL,
                self.app
            );
        }
        if self.page_size == Some(0) {
            bail!("page_size must be at least 1");
        }
        if self.tick_rate_ms == Some(0) {
            bail!("tick_rate_ms must be at least 1");
        }
        Ok(())
    }
}

/// Effective runtime configuration: CLI flags over file values over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub client: ClientConfig,
    pub start_page: usize,
    pub tick_rate: Duration,
}

impl RuntimeConfig {
    pub fn resolve(cli: &Cli, settings: &Settings) -> Result<Self> {
        let page_size = cli
            .page_size
            .or(settings.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            bail!("--page-size must be at least 1");
        }

        let api_base = cli
            .api_base
            .clone()
            .or_else(|| settings.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            client: ClientConfig {
                api_base,
                page_size,
                timeout: Duration::from_secs(
                    settings.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
                ),
            },
            start_page: cli.page,
            tick_rate: Duration::from_millis(settings.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS)),
        })
    }
}

pub fn config_dir(custom: Option<&PathBuf>) -> Option<PathBuf> {
    custom
        .cloned()
        .or_else(|| dirs::home_dir().map(|p| p.join(".config").join("hn-pager")))
}

pub fn settings_path(config_dir: &Path) -> PathBuf {
    config_dir.join("settings.toml")
}

pub fn log_path(config_dir: &Path) -> PathBuf {
    config_dir.join("hn-pager.log")
}
