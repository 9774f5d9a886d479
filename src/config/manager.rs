//! Resolves a platform configuration directory via `dirs`, and falls back to
//! in-memory defaults whenever no file is present, rather than treating a
//! missing config as an error.

use std::path::PathBuf;

use super::assembler_config::{AssemblerConfig, ConfigError};

const CONFIG_DIR_NAME: &str = "octasm";
const CONFIG_FILE_NAME: &str = "octasm.toml";

/// Locates, loads, and lazily creates the assembler's on-disk configuration.
pub struct ConfigManager;

impl ConfigManager {
    fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|mut path| {
                path.push(CONFIG_DIR_NAME);
                path
            })
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Loads the user's configuration, creating a default one on disk if none
    /// exists yet. Never returns `Err` for a simple "nothing there" case;
    /// only genuine IO/parse failures propagate.
    pub fn load_or_default() -> AssemblerConfig {
        match Self::load() {
            Ok(config) => config,
            Err(_) => AssemblerConfig::default(),
        }
    }

    fn load() -> Result<AssemblerConfig, ConfigError> {
        let dir = Self::config_dir()?;
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            std::fs::create_dir_all(&dir).map_err(ConfigError::Io)?;
            let default = AssemblerConfig::default();
            default.save_to_path(&path)?;
            return Ok(default);
        }
        AssemblerConfig::load_from_path(&path)
    }
}
