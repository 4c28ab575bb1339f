// SPDX-License-Identifier: MPL-2.0
//! User preferences persisted to a `settings.toml` file in the platform
//! config directory. Only ambient preferences live here (language, push
//! notification opt-in); product data is session-only by design.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Marketstand";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Preferred display locale in BCP-47 form (e.g. `ko`, `en-US`).
    pub language: Option<String>,
    /// Whether the seller wants push notifications (profile toggle).
    #[serde(default)]
    pub push_notifications: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            push_notifications: Some(true),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
