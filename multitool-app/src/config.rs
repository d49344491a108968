use anyhow::{bail, Context, Result};
use multitool_policy::is_allowed_url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "multitool.yaml";
const DEFAULT_RELEASE_PAGE: &str = "https://github.com/drrakendu78/TradSC/releases";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Development,
    #[default]
    Production,
}

impl RunMode {
    /// Development logs everything useful; production keeps errors only.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            RunMode::Development => "debug",
            RunMode::Production => "error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub mode: RunMode,
    pub log_filter: Option<String>,
    pub release_page_url: String,
    pub store_product_id: Option<String>,
    pub assume_elevated: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: RunMode::Production,
            log_filter: None,
            release_page_url: DEFAULT_RELEASE_PAGE.to_string(),
            store_product_id: None,
            assume_elevated: None,
        }
    }
}

impl Config {
    pub fn path() -> PathBuf {
        std::env::var("MULTITOOL_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    pub fn exists() -> bool {
        Self::path().exists()
    }

    /// Loads the config file, falling back to defaults when it is absent.
    /// `MULTITOOL_MODE` overrides the configured mode.
    pub fn load() -> Result<Self> {
        let path = Self::path();
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };

        if let Ok(mode) = std::env::var("MULTITOOL_MODE") {
            config.mode = serde_yaml::from_str(&mode)
                .with_context(|| format!("Invalid MULTITOOL_MODE: {}", mode))?;
        }
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !is_allowed_url(&self.release_page_url) {
            bail!(
                "release_page_url is not an allowed external URL: {}",
                self.release_page_url
            );
        }
        if let Some(id) = &self.store_product_id {
            if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
                bail!("store_product_id must be alphanumeric, got {:?}", id);
            }
        }
        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                bail!("log_filter cannot be empty");
            }
        }
        Ok(())
    }

    pub fn log_filter(&self) -> String {
        self.log_filter
            .clone()
            .unwrap_or_else(|| self.mode.default_log_filter().to_string())
    }

    pub fn store_url(&self) -> Option<String> {
        self.store_product_id
            .as_ref()
            .map(|id| format!("ms-windows-store://pdp/?productid={}", id))
    }
}
