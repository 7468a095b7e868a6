// File: crates/plotframe-core/src/types.rs
// Summary: Shared types and constants (surface sizes, margins).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default surface width in pixels.
pub const WIDTH: f64 = 1024.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 640.0;

/// Per-side inset between the outer frame and the bounded content area.
/// Contract: all fields are finite and non-negative; checked by [`Margin::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    /// Sides in CSS order: top, right, bottom, left.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal inset (left + right).
    pub fn horizontal(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vertical(&self) -> f64 { self.top + self.bottom }

    pub fn validate(&self) -> Result<()> {
        let sides = [
            ("margin.top", self.top),
            ("margin.right", self.right),
            ("margin.bottom", self.bottom),
            ("margin.left", self.left),
        ];
        for (field, value) in sides {
            check_extent(field, value)?;
        }
        Ok(())
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(24.0, 24.0, 56.0, 72.0)
    }
}

/// Reject NaN/infinite and negative extents.
pub(crate) fn check_extent(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::NonFinite { field });
    }
    if value < 0.0 {
        return Err(Error::NegativeExtent { field, value });
    }
    Ok(())
}
