//! Configuration management
//!
//! Settings live in `settings.json` in the userdir directory:
//! ```json
//! {
//!   "app": { "apiUrl": "https://...", "timeoutSecs": 30, "demoMode": false }
//! }
//! ```
//! Keys this crate does not manage are preserved on save.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::adapters::http::{validate_api_url, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
    #[serde(default)]
    demo_mode: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Userdir configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicitly configured API URL; `None` means the default endpoint
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub demo_mode: bool,
}

impl Config {
    /// Load config from the userdir directory
    ///
    /// `USERDIR_API_URL` and `USERDIR_DEMO_MODE` override the file.
    pub fn load(userdir_dir: &Path) -> Result<Self> {
        let mut config = Self::load_file(userdir_dir)?;

        if let Some(url) = std::env::var("USERDIR_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            config.api_url = Some(url);
        }

        match std::env::var("USERDIR_DEMO_MODE").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => config.demo_mode = true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => config.demo_mode = false,
            _ => {}
        }

        Ok(config)
    }

    /// Load only what settings.json says, ignoring environment overrides
    ///
    /// Use this before `save` so overrides never get written back.
    pub fn load_file(userdir_dir: &Path) -> Result<Self> {
        let raw = read_settings(userdir_dir)?;

        Ok(Self {
            api_url: raw.app.api_url,
            timeout_secs: raw.app.timeout_secs,
            demo_mode: raw.app.demo_mode,
        })
    }

    /// Save config, preserving settings this crate doesn't manage
    pub fn save(&self, userdir_dir: &Path) -> Result<()> {
        let settings_path = userdir_dir.join("settings.json");
        let mut settings = read_settings(userdir_dir)?;

        settings.app.api_url = self.api_url.clone();
        settings.app.timeout_secs = self.timeout_secs;
        settings.app.demo_mode = self.demo_mode;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// The endpoint the HTTP source requests
    pub fn effective_api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Set the API URL after validating it
    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        validate_api_url(url)?;
        self.api_url = Some(url.to_string());
        Ok(())
    }

    /// Go back to the default endpoint
    pub fn reset_api_url(&mut self) {
        self.api_url = None;
    }

    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }
}

fn read_settings(userdir_dir: &Path) -> Result<SettingsFile> {
    let settings_path = userdir_dir.join("settings.json");

    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}
