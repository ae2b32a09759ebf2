//! Configuration loaded from `camroll.toml`.
//!
//! All fields have sensible defaults. A config file need only specify the
//! values it wants to override; a missing file means stock defaults.
//! Unknown keys are rejected so typos fail loudly instead of silently
//! falling back.
//!
//! ```toml
//! store_path = "camroll.json"
//! quality = 100
//!
//! [bounds]
//! width = 414
//! height = 896
//! ```

use crate::imaging::Quality;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Bounding box photos are normalized into — the target display size.
///
/// The default is a common phone-portrait point size; photos are fit inside
/// it with aspect ratio preserved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct BoundsConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            width: 414,
            height: 896,
        }
    }
}

/// Top-level configuration for the photo roll.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RollConfig {
    /// Location of the store file.
    pub store_path: PathBuf,
    /// Target bounding box for normalization.
    pub bounds: BoundsConfig,
    /// JPEG quality for re-encoding (1-100).
    pub quality: u32,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("camroll.json"),
            bounds: BoundsConfig::default(),
            quality: 100,
        }
    }
}

impl RollConfig {
    /// Load from a TOML file; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.bounds.width, self.bounds.height)
    }

    pub fn quality(&self) -> Quality {
        Quality::new(self.quality)
    }
}
