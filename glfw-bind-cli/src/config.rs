//! Configuration loading and parsing

use anyhow::{bail, Context, Result};
use glfw_bind::{LoaderConfig, Slot};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main application configuration (loaded from a TOML file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub library: LoaderConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_title")]
    pub title: String,
    /// Open full screen on the primary monitor
    #[serde(default)]
    pub fullscreen: bool,
    #[serde(default = "default_true")]
    pub resizable: bool,
    #[serde(default = "default_true")]
    pub decorated: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
            fullscreen: false,
            resizable: true,
            decorated: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    /// Stop after this many frames (default: run until the window closes)
    #[serde(default)]
    pub frames: Option<u64>,
    /// Sleep between polls, ignored when waiting for events
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Block in `wait_events` instead of polling
    #[serde(default)]
    pub wait: bool,
    /// Print events as JSON lines
    #[serde(default)]
    pub json: bool,
    /// Slots to print, by name (default: all)
    #[serde(default)]
    pub slots: Option<Vec<String>>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: None,
            interval_ms: default_interval_ms(),
            wait: false,
            json: false,
            slots: None,
        }
    }
}

impl RunConfig {
    /// Parse the slot names, in the order of [`Slot::ALL`]
    pub fn selected_slots(&self) -> Result<Vec<Slot>> {
        let Some(names) = &self.slots else {
            return Ok(Slot::ALL.to_vec());
        };

        let mut selected = Vec::new();
        for name in names {
            let name = name.trim();
            if name == "all" {
                return Ok(Slot::ALL.to_vec());
            }
            match Slot::from_name(name) {
                Some(slot) => selected.push(slot),
                None => bail!(
                    "Unknown callback slot '{}' (expected one of: {})",
                    name,
                    Slot::ALL.map(|s| s.name()).join(", ")
                ),
            }
        }
        selected.sort();
        selected.dedup();
        Ok(selected)
    }
}

fn default_width() -> i32 {
    640
}

fn default_height() -> i32 {
    480
}

fn default_title() -> String {
    "glfw-events".to_string()
}

fn default_interval_ms() -> u64 {
    16
}

fn default_true() -> bool {
    true
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    config.run.selected_slots()?;
    if config.window.width < 0 || config.window.height < 0 {
        bail!(
            "Window size must be non-negative, got {}x{}",
            config.window.width,
            config.window.height
        );
    }

    Ok(config)
}
