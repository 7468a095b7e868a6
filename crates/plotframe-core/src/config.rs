// File: crates/plotframe-core/src/config.rs
// Summary: Layout configuration loaded from JSON, with defaults for every field.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dimensions::Dimensions;
use crate::error::Result;
use crate::types::{Margin, HEIGHT, WIDTH};

/// Surface size and margins used to build [`Dimensions`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, margin: Margin::default() }
    }
}

impl FrameConfig {
    /// Read a JSON config file. Missing fields fall back to defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let cfg: Self = serde_json::from_str(&text)?;
        log::debug!("loaded frame config from {}", path.display());
        Ok(cfg)
    }

    pub fn build(&self) -> Result<Dimensions> {
        Dimensions::new(self.width, self.height, self.margin)
    }
}
