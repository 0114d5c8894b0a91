//! Analysis configuration.
//!
//! Loaded from TOML; every field is optional:
//!
//! ```toml
//! fixed_width = 8
//! lowercase = true
//! strip_newlines = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default bits per symbol in the fixed-width baseline (one byte).
pub const DEFAULT_FIXED_WIDTH: u32 = 8;

/// Options for tabulating text and comparing against the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bits per symbol in the fixed-width baseline.
    pub fixed_width: u32,
    /// Lower-case text before counting.
    pub lowercase: bool,
    /// Drop `\n` before counting. `\r` is kept.
    pub strip_newlines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixed_width: DEFAULT_FIXED_WIDTH,
            lowercase: true,
            strip_newlines: true,
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check that `fixed_width` is in `1..=64`.
    pub fn validate(&self) -> Result<()> {
        if self.fixed_width == 0 || self.fixed_width > 64 {
            return Err(Error::InvalidConfig(format!(
                "fixed_width must be in 1..=64, got {}",
                self.fixed_width
            )));
        }
        Ok(())
    }
}
