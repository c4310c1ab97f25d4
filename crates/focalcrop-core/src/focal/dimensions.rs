//! Output size derivation from an aspect-ratio request.

use tracing::{debug, trace};

use crate::error::CropError;
use crate::types::{AspectRatio, OutputDimensions, ResizeRequest};

/// Fill in a missing output height from the width and aspect ratio.
///
/// The request's own width and height come back unchanged unless the width
/// is set, the height is absent and an aspect ratio is given. The focal
/// point is never consulted.
///
/// # Errors
///
/// Returns `CropError::InvalidGeometry` for a zero width or when the derived
/// height does not fit in a `u32`.
pub fn resolve_output_dimensions(request: &ResizeRequest) -> Result<OutputDimensions, CropError> {
    let requested = request.output_dimensions();

    let (Some(width), None, Some(aspect_ratio)) =
        (request.width, request.height, request.aspect_ratio)
    else {
        trace!(
            width = ?request.width,
            height = ?request.height,
            has_aspect_ratio = request.aspect_ratio.is_some(),
            "Output dimensions need no derivation"
        );
        return Ok(requested);
    };

    let height = derive_height(width, &aspect_ratio)?;
    debug!(
        width,
        height,
        aspect_ratio = %aspect_ratio,
        "Derived output height from aspect ratio"
    );

    Ok(OutputDimensions::new(Some(width), Some(height)))
}

/// Compute the height for `width` at `W:H` as `width * H / W`, rounded half
/// away from zero.
///
/// For integer ratios this is the exactly rounded rational, so `9` at `18:7`
/// gives 4 where dividing by a rounded `18 / 7` gives 3. A result that rounds
/// to zero is raised to one pixel.
pub fn derive_height(width: u32, aspect_ratio: &AspectRatio) -> Result<u32, CropError> {
    if width == 0 {
        return Err(CropError::InvalidGeometry(
            "output width must be non-zero".to_string(),
        ));
    }

    let height =
        (width as f64 * aspect_ratio.height_units() / aspect_ratio.width_units()).round();

    if !height.is_finite() || height > u32::MAX as f64 {
        return Err(CropError::InvalidGeometry(format!(
            "height derived from width {} and ratio {} is out of range",
            width, aspect_ratio
        )));
    }

    Ok((height as u32).max(1))
}
