//! Settings loading for {config_dir}/specter/config.toml

use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use specter_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "specter";

const DEFAULT_CONFIG: &str = r#"# Specter configuration
# All values are optional; defaults are shown commented out.

# [server]
# url = "http://localhost:8777"
# timeout_secs = 30

# [ui]
# tick_rate_ms = 100
# tab_width = 2
"#;

/// Platform config file location, None when the platform has no
/// config directory concept.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings, falling back to defaults on any problem. A missing
/// file is normal; a malformed one is reported and ignored.
pub fn load_settings() -> Settings {
    match config_file_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config on first run. Does nothing when the
/// file already has content.
pub fn ensure_config_file() -> Result<()> {
    match config_file_path() {
        Some(path) => ensure_config_file_at(&path),
        None => Ok(()),
    }
}

fn ensure_config_file_at(config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config directory: {}", e)))?;
    }

    let mut file = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(config_path)
        .map_err(|e| Error::config(format!("Failed to open {:?}: {}", config_path, e)))?;

    // Exclusive lock so two first runs cannot interleave writes
    file.lock_exclusive()
        .map_err(|e| Error::config(format!("Failed to lock {:?}: {}", config_path, e)))?;

    let len = file
        .metadata()
        .map_err(|e| Error::config(format!("Failed to stat {:?}: {}", config_path, e)))?
        .len();
    if len > 0 {
        // Another instance (or an earlier run) already wrote it
        return Ok(());
    }

    file.write_all(DEFAULT_CONFIG.as_bytes())
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    file.flush()
        .map_err(|e| Error::config(format!("Failed to flush {:?}: {}", config_path, e)))?;

    // Lock is released when the file handle is dropped
    info!("Wrote default config to {:?}", config_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_settings_from(&dir.path().join("config.toml"));
        assert_eq!(settings.server.url, "http://localhost:8777");
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server = not valid toml [").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.server.url, "http://localhost:8777");
    }

    #[test]
    fn test_valid_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nurl = \"http://h:1\"\ntimeout_secs = 5\n").unwrap();

        let settings = load_settings_from(&path);
        assert_eq!(settings.server.url, "http://h:1");
        assert_eq!(settings.server.timeout_secs, 5);
    }

    #[test]
    fn test_ensure_writes_commented_default_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        ensure_config_file_at(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("# [server]"));

        // The commented template parses as an empty (all-default) config
        let settings = load_settings_from(&path);
        assert_eq!(settings.server.url, "http://localhost:8777");

        // A second run leaves existing content alone
        std::fs::write(&path, "[ui]\ntab_width = 8\n").unwrap();
        ensure_config_file_at(&path).unwrap();
        assert_eq!(load_settings_from(&path).ui.tab_width, 8);
    }
}
