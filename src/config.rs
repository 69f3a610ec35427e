//! User configuration
//!
//! Optional personal preferences in `~/.config/getpr/config.toml` (or the
//! platform equivalent; `%APPDATA%\getpr\config.toml` on Windows):
//!
//! ```toml
//! # GraphQL endpoint, e.g. for GitHub Enterprise
//! api-url = "https://ghe.example.com/api/graphql"
//!
//! # Remote whose push URL names the repository
//! remote = "upstream"
//!
//! # Open the pull request in the browser after printing it
//! open = true
//!
//! # Extra commit message patterns, tried after the GitHub conventions.
//! # The first capture group is the pull request number.
//! pr-patterns = ['\[PR (\d+)\]']
//! ```
//!
//! Command-line flags override environment variables, which override the file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use color_print::cformat;
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::Deserialize;

use crate::github::DEFAULT_API_URL;
use crate::styling::{eprintln, warning_message};

/// Overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "GETPR_CONFIG_PATH";

/// Overrides `api-url`.
pub const API_URL_ENV: &str = "GETPR_API_URL";

pub const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserConfig {
    #[serde(default)]
    pub api_url: Option<String>,

    #[serde(default)]
    pub remote: Option<String>,

    #[serde(default)]
    pub open: Option<bool>,

    #[serde(default)]
    pub pr_patterns: Vec<String>,

    /// Keys this version does not know about; warned about and ignored
    #[serde(flatten, default)]
    pub unknown: BTreeMap<String, toml::Value>,
}

impl UserConfig {
    /// Load the config file, or defaults when there is none.
    ///
    /// A file that exists but cannot be read or parsed is an error. Unknown
    /// keys produce a warning on stderr.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = config_path() else {
            log::debug!("No config directory; using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            log::debug!("Config {} does not exist; using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load a config file named on the command line.
    ///
    /// Unlike the default location, a missing file is worth a warning.
    pub fn load_explicit(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            eprintln!(
                "{}",
                warning_message(cformat!("Config file not found: <bold>{}</>", path.display()))
            );
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load a specific config file.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config {}", path.display()))?;
        let config = Self::load_from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());

        for key in config.unknown.keys() {
            eprintln!(
                "{}",
                warning_message(cformat!(
                    "Config {} has unknown field <bold>{key}</> (will be ignored)",
                    path.display()
                ))
            );
        }

        Ok(config)
    }

    /// Parse config TOML.
    pub fn load_from_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// GraphQL endpoint: `$GETPR_API_URL`, then `api-url`, then github.com.
    pub fn api_url(&self) -> String {
        self.api_url_with_env(std::env::var(API_URL_ENV).ok())
    }

    fn api_url_with_env(&self, env: Option<String>) -> String {
        env.filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Remote to read the push URL from; the flag wins over the file.
    pub fn remote<'a>(&'a self, flag: Option<&'a str>) -> &'a str {
        flag.or(self.remote.as_deref()).unwrap_or(DEFAULT_REMOTE)
    }

    /// Whether to open the pull request in a browser.
    pub fn open(&self, flag: bool) -> bool {
        flag || self.open.unwrap_or(false)
    }
}

/// Location of the user config file.
///
/// `$GETPR_CONFIG_PATH` when set, otherwise `getpr/config.toml` under the
/// platform config directory (XDG on Linux and macOS).
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("getpr").join("config.toml"))
}
