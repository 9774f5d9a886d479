//! A serde/toml-serializable settings struct with a `Default` impl matching
//! every numeric default this assembler is built around, plus save/load
//! helpers that round-trip through TOML.
//!
//! Every field here is a fixed constant of the architecture turned into a
//! knob; overriding them lets an embedder target a different memory layout
//! without patching the crate.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable parameters of the assembler. The `Default` impl reproduces every
/// numeric default this assembler uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Address at which the code image begins; `IC` is initialized to this.
    pub code_origin: u16,
    /// Maximum accepted length of a source line, in characters.
    pub max_line_length: usize,
    /// Maximum accepted length of a symbol, constant, or macro name.
    pub max_symbol_length: usize,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        AssemblerConfig {
            code_origin: 100,
            max_line_length: crate::reserved::MAX_LINE_LENGTH,
            max_symbol_length: crate::reserved::MAX_SYMBOL_LENGTH,
        }
    }
}

impl AssemblerConfig {
    /// Serializes and writes this configuration to `path`, overwriting
    /// whatever was there.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, content).map_err(ConfigError::Io)?;
        Ok(())
    }

    /// Reads and parses a configuration from `path`.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&content).map_err(ConfigError::Parse)
    }
}

/// Errors raised while loading or saving an [`AssemblerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[source] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[source] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[source] toml::ser::Error),
    #[error("could not determine the configuration directory")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let cfg = AssemblerConfig::default();
        assert_eq!(cfg.code_origin, 100);
        assert_eq!(cfg.max_line_length, 80);
        assert_eq!(cfg.max_symbol_length, 31);
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("octasm.toml");
        let cfg = AssemblerConfig {
            code_origin: 200,
            ..AssemblerConfig::default()
        };
        cfg.save_to_path(&path).unwrap();
        let loaded = AssemblerConfig::load_from_path(&path).unwrap();
        assert_eq!(cfg, loaded);
    }
}
