//! Focal-point edit resolution.
//!
//! Turns a [`ResizeRequest`] plus the source image size into a [`FocalPlan`]:
//!
//! 1. Output size: a missing height is derived from width and aspect ratio
//! 2. Crop: when both focal coordinates are given, the largest region with the
//!    target aspect ratio, centered on the focal point
//! 3. Fit: forced to [`FitMode::Cover`] whenever a crop is produced, since the
//!    crop already has the target aspect ratio
//!
//! Everything here is pure arithmetic on its inputs. Resolving the same
//! request twice yields the same plan.

mod crop;
mod dimensions;

pub(crate) use crop::div_round;
pub use crop::resolve_crop_rectangle;
pub use dimensions::{derive_height, resolve_output_dimensions};

use tracing::debug;

use crate::error::CropError;
use crate::types::{Dimensions, FitMode, FocalPlan, ResizeRequest};

/// Resolve output size, focal crop and fit override for one edit request.
///
/// The request is not modified. Merge the result with
/// [`ResizeRequest::apply_plan`] if the caller keeps working on the request.
pub fn resolve_edits(source: Dimensions, request: &ResizeRequest) -> Result<FocalPlan, CropError> {
    let output = resolve_output_dimensions(request)?;
    let crop = resolve_crop_rectangle(source, output, request.focal_point())?;
    let fit = crop.map(|_| FitMode::Cover);

    let plan = FocalPlan { output, crop, fit };
    debug!(?plan, "Resolved focal edit plan");

    Ok(plan)
}
