//! Configuration loading for Specter
//!
//! One TOML file: `{config_dir}/specter/config.toml`. CLI flags override
//! it; built-in defaults back both.

pub mod settings;
pub mod types;

pub use settings::{config_file_path, ensure_config_file, load_settings};
pub use types::{ServerSettings, Settings, UiSettings};
