//! Application settings
//!
//! Stored as JSON under the user's config directory. A missing file is
//! created with defaults; a malformed one is an error so the user can fix it.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::constants::{contact, links, validation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dataset to render instead of the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_path: Option<PathBuf>,

    #[serde(default = "default_window_width")]
    pub window_width: u16,
    #[serde(default = "default_window_height")]
    pub window_height: u16,

    /// Round trip of the simulated contact submission
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// Make the page inert to scrolling while a detail overlay is open
    #[serde(default = "default_lock_scroll_on_overlay")]
    pub lock_scroll_on_overlay: bool,

    /// Templates for project outbound links; `{id}` is replaced with the project id
    #[serde(default = "default_live_site_url")]
    pub live_site_url: String,
    #[serde(default = "default_code_url")]
    pub code_url: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_window_width() -> u16 {
    1100
}

fn default_window_height() -> u16 {
    800
}

fn default_submit_delay_ms() -> u64 {
    contact::SUBMIT_DELAY_MS
}

fn default_lock_scroll_on_overlay() -> bool {
    true
}

fn default_live_site_url() -> String {
    links::LIVE_SITE_TEMPLATE.to_string()
}

fn default_code_url() -> String {
    links::CODE_TEMPLATE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            content_path: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
            submit_delay_ms: default_submit_delay_ms(),
            lock_scroll_on_overlay: default_lock_scroll_on_overlay(),
            live_site_url: default_live_site_url(),
            code_url: default_code_url(),
        }
    }
}

impl Settings {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load from the default location, writing defaults if no file exists yet
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, creating default config at {:?}", path);
            let settings = Settings::default();
            settings.save_to(path)?;
            return Ok(settings);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let mut settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config JSON from {:?}", path))?;

        settings.validate_and_clamp();
        info!(path = %path.display(), "Loaded config");
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config to JSON")?;

        fs::write(path, json).with_context(|| format!("Failed to write config to {:?}", path))?;

        info!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Clamp values to safe ranges after loading
    fn validate_and_clamp(&mut self) {
        use validation::*;

        if self.window_width < MIN_WINDOW_DIMENSION || self.window_width > MAX_WINDOW_DIMENSION {
            warn!(window_width = self.window_width, "window_width out of range, clamping");
            self.window_width = self.window_width.clamp(MIN_WINDOW_DIMENSION, MAX_WINDOW_DIMENSION);
        }

        if self.window_height < MIN_WINDOW_DIMENSION || self.window_height > MAX_WINDOW_DIMENSION {
            warn!(window_height = self.window_height, "window_height out of range, clamping");
            self.window_height = self.window_height.clamp(MIN_WINDOW_DIMENSION, MAX_WINDOW_DIMENSION);
        }

        if self.submit_delay_ms > contact::MAX_SUBMIT_DELAY_MS {
            warn!(
                submit_delay_ms = self.submit_delay_ms,
                max = contact::MAX_SUBMIT_DELAY_MS,
                "submit_delay_ms exceeds maximum, clamping"
            );
            self.submit_delay_ms = contact::MAX_SUBMIT_DELAY_MS;
        }

        for (name, template) in [("live_site_url", &self.live_site_url), ("code_url", &self.code_url)] {
            if !template.contains(links::ID_PLACEHOLDER) {
                warn!(field = name, value = %template, "link template has no {{id}} placeholder");
            }
        }
    }
}

/// Substitute a project id into a link template
pub fn format_link(template: &str, id: u32) -> String {
    template.replace(links::ID_PLACEHOLDER, &id.to_string())
}
