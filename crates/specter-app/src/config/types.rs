//! Configuration types for Specter

use serde::{Deserialize, Serialize};

use specter_backend::{DEFAULT_SERVER_URL, DEFAULT_TIMEOUT_SECS};

/// Application settings ({config_dir}/specter/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Generator server settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL of the generator server
    #[serde(default = "default_server_url")]
    pub url: String,

    /// Timeout in seconds applied to every HTTP request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Tick interval in milliseconds for status animations
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Spaces inserted by the Tab key in the editor
    #[serde(default = "default_tab_width")]
    pub tab_width: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            tab_width: default_tab_width(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_tab_width() -> usize {
    2
}
