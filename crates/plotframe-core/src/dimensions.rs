// File: crates/plotframe-core/src/dimensions.rs
// Summary: Drawing surface geometry: outer size, margins and the derived bounded area.
// Notes:
// - Bounded extents are always derived from width/height and margins. Values
//   supplied from outside (e.g. JSON) are checked against the derivation.

use serde::{Deserialize, Serialize};

use crate::error::{Axis, Error, Result};
use crate::geometry::Rect;
use crate::types::{check_extent, Margin, HEIGHT, WIDTH};

/// Relative tolerance when comparing supplied bounded extents with derived ones.
/// Scaled by the derived extent, floored at 1.0.
pub const BOUNDED_EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDimensions")]
pub struct Dimensions {
    height: f64,
    width: f64,
    margin: Margin,
    bounded_width: f64,
    bounded_height: f64,
}

impl Dimensions {
    /// Build dimensions for a `width` x `height` surface, deriving the bounded area.
    pub fn new(width: f64, height: f64, margin: Margin) -> Result<Self> {
        check_extent("width", width)?;
        check_extent("height", height)?;
        margin.validate()?;

        let bounded_width = width - margin.left - margin.right;
        if bounded_width < 0.0 {
            return Err(Error::MarginOverflow {
                axis: Axis::Horizontal,
                extent: width,
                margins: margin.horizontal(),
            });
        }
        let bounded_height = height - margin.top - margin.bottom;
        if bounded_height < 0.0 {
            return Err(Error::MarginOverflow {
                axis: Axis::Vertical,
                extent: height,
                margins: margin.vertical(),
            });
        }

        log::debug!(
            "layout {}x{} -> bounded {}x{}",
            width,
            height,
            bounded_width,
            bounded_height
        );
        Ok(Self { height, width, margin, bounded_width, bounded_height })
    }

    /// Accept independently supplied bounded extents if they agree with the derived ones.
    pub fn from_parts(
        width: f64,
        height: f64,
        margin: Margin,
        bounded_width: f64,
        bounded_height: f64,
    ) -> Result<Self> {
        let dims = Self::new(width, height, margin)?;
        check_bounded("boundedWidth", dims.bounded_width, bounded_width)?;
        check_bounded("boundedHeight", dims.bounded_height, bounded_height)?;
        Ok(dims)
    }

    /// Same margins, new outer size (container resize).
    pub fn with_size(&self, width: f64, height: f64) -> Result<Self> {
        Self::new(width, height, self.margin)
    }

    pub fn with_margin(&self, margin: Margin) -> Result<Self> {
        Self::new(self.width, self.height, margin)
    }

    pub fn width(&self) -> f64 { self.width }
    pub fn height(&self) -> f64 { self.height }
    pub fn margin(&self) -> Margin { self.margin }
    pub fn bounded_width(&self) -> f64 { self.bounded_width }
    pub fn bounded_height(&self) -> f64 { self.bounded_height }

    /// Whole drawing surface.
    pub fn outer(&self) -> Rect {
        Rect::from_ltwh(0.0, 0.0, self.width, self.height)
    }

    /// Bounded content area in outer coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_ltwh(self.margin.left, self.margin.top, self.bounded_width, self.bounded_height)
    }

    /// Translate an outer-surface point into bounded-area coordinates.
    pub fn to_bounded(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.margin.left, y - self.margin.top)
    }

    /// Clamp an outer-surface point onto the bounded area.
    pub fn clamp_to_bounds(&self, x: f64, y: f64) -> (f64, f64) {
        let b = self.bounds();
        (x.clamp(b.left, b.right), y.clamp(b.top, b.bottom))
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        let margin = Margin::default();
        Self {
            height: HEIGHT,
            width: WIDTH,
            margin,
            bounded_width: WIDTH - margin.left - margin.right,
            bounded_height: HEIGHT - margin.top - margin.bottom,
        }
    }
}

fn check_bounded(field: &'static str, expected: f64, actual: f64) -> Result<()> {
    if !actual.is_finite() {
        return Err(Error::NonFinite { field });
    }
    if (expected - actual).abs() > BOUNDED_EPSILON * expected.abs().max(1.0) {
        log::warn!("{field} {actual} disagrees with derived {expected}");
        return Err(Error::BoundedMismatch { field, expected, actual });
    }
    Ok(())
}

/// Wire form accepted on input; bounded extents are optional.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDimensions {
    height: f64,
    width: f64,
    margin: Margin,
    bounded_width: Option<f64>,
    bounded_height: Option<f64>,
}

impl TryFrom<RawDimensions> for Dimensions {
    type Error = Error;

    fn try_from(raw: RawDimensions) -> Result<Self> {
        let dims = Dimensions::new(raw.width, raw.height, raw.margin)?;
        if let Some(bw) = raw.bounded_width {
            check_bounded("boundedWidth", dims.bounded_width, bw)?;
        }
        if let Some(bh) = raw.bounded_height {
            check_bounded("boundedHeight", dims.bounded_height, bh)?;
        }
        Ok(dims)
    }
}
