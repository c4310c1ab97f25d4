//! Core value types for focal-point edits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CropError;

/// Pixel dimensions of a source image or a requested output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create dimensions, rejecting a zero-area size.
    pub fn new(width: u32, height: u32) -> Result<Self, CropError> {
        if width == 0 || height == 0 {
            return Err(CropError::InvalidGeometry(format!(
                "dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    /// Check whether either side is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A `W:H` aspect ratio such as `16:9` or `1.85:1`.
///
/// Travels through serde as its string token, so an edit payload can carry
/// `"aspectRatio": "16:9"` directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AspectRatio {
    width_units: f64,
    height_units: f64,
}

impl AspectRatio {
    /// Create a ratio from its two parts. Both must be finite and positive.
    pub fn new(width_units: f64, height_units: f64) -> Result<Self, CropError> {
        for part in [width_units, height_units] {
            if !part.is_finite() || part <= 0.0 {
                return Err(CropError::InvalidAspectRatio(format!(
                    "{}:{} (parts must be positive numbers)",
                    width_units, height_units
                )));
            }
        }
        Ok(Self {
            width_units,
            height_units,
        })
    }

    /// The width part of the ratio.
    pub fn width_units(&self) -> f64 {
        self.width_units
    }

    /// The height part of the ratio.
    pub fn height_units(&self) -> f64 {
        self.height_units
    }

    /// The ratio as a single number (width over height).
    pub fn ratio(&self) -> f64 {
        self.width_units / self.height_units
    }
}

impl FromStr for AspectRatio {
    type Err = CropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CropError::InvalidAspectRatio(format!("{:?} (expected \"W:H\")", s));

        let (w, h) = s.split_once(':').ok_or_else(invalid)?;
        if h.contains(':') {
            return Err(invalid());
        }

        let w: f64 = w.trim().parse().map_err(|_| invalid())?;
        let h: f64 = h.trim().parse().map_err(|_| invalid())?;

        Self::new(w, h)
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = CropError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(value: AspectRatio) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width_units, self.height_units)
    }
}

/// Normalized focal point. Both coordinates must be present for focal
/// cropping to happen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FocalPoint {
    /// Horizontal position (0.0 = left edge, 1.0 = right edge).
    pub x: Option<f64>,
    /// Vertical position (0.0 = top edge, 1.0 = bottom edge).
    pub y: Option<f64>,
}

impl FocalPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Both coordinates, or `None` when either one is missing.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.x?, self.y?))
    }
}

/// How the resize step maps the (possibly cropped) image onto the target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Fill the whole box, cropping whatever overflows.
    #[default]
    Cover,
    /// Fit inside the box and letterbox the remainder.
    Contain,
    /// Stretch to the box, ignoring aspect ratio.
    Fill,
    /// Shrink to fit inside the box, keeping aspect ratio. No padding.
    Inside,
    /// Grow to cover the box, keeping aspect ratio. No cropping.
    Outside,
}

/// Requested output size. Either side may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDimensions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl OutputDimensions {
    pub fn new(width: Option<u32>, height: Option<u32>) -> Self {
        Self { width, height }
    }

    /// Both sides, failing with `MissingDimension` for the first absent one.
    pub fn require_both(&self) -> Result<(u32, u32), CropError> {
        let width = self.width.ok_or(CropError::MissingDimension("width"))?;
        let height = self.height.ok_or(CropError::MissingDimension("height"))?;
        Ok((width, height))
    }
}

/// Resize instructions for one edit, as received from the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResizeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<FitMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<AspectRatio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focal_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focal_y: Option<f64>,
}

impl ResizeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_dimensions(&self) -> OutputDimensions {
        OutputDimensions::new(self.width, self.height)
    }

    pub fn focal_point(&self) -> FocalPoint {
        FocalPoint {
            x: self.focal_x,
            y: self.focal_y,
        }
    }

    /// Merge a resolved plan back into this request.
    ///
    /// Resolved dimensions replace the requested ones and a fit override,
    /// when present, replaces the requested fit mode.
    pub fn apply_plan(&mut self, plan: &FocalPlan) {
        if plan.output.width.is_some() {
            self.width = plan.output.width;
        }
        if plan.output.height.is_some() {
            self.height = plan.output.height;
        }
        if let Some(fit) = plan.fit {
            self.fit = Some(fit);
        }
    }
}

/// Region of the source image to extract, in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropRectangle {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRectangle {
    /// One past the rightmost column.
    pub fn right(&self) -> u64 {
        self.left as u64 + self.width as u64
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> u64 {
        self.top as u64 + self.height as u64
    }

    /// Check that the rectangle is non-empty and lies inside `bounds`.
    pub fn fits_within(&self, bounds: Dimensions) -> bool {
        self.width > 0
            && self.height > 0
            && self.right() <= bounds.width as u64
            && self.bottom() <= bounds.height as u64
    }

    /// Check whether the rectangle covers all of `bounds`.
    pub fn is_full(&self, bounds: Dimensions) -> bool {
        self.left == 0
            && self.top == 0
            && self.width == bounds.width
            && self.height == bounds.height
    }
}

/// Outcome of resolving one edit request.
///
/// Returned instead of mutating the request. Use
/// [`ResizeRequest::apply_plan`] to merge it when in-place semantics are
/// wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FocalPlan {
    /// Output size after aspect-ratio derivation.
    pub output: OutputDimensions,
    /// Region to extract before resizing, when focal cropping applies.
    pub crop: Option<CropRectangle>,
    /// Fit mode the resize step must use instead of the requested one.
    pub fit: Option<FitMode>,
}

impl FocalPlan {
    /// True when the plan leaves the request unchanged and crops nothing.
    pub fn is_noop(&self, request: &ResizeRequest) -> bool {
        self.crop.is_none() && self.fit.is_none() && self.output == request.output_dimensions()
    }
}
