//! Region extraction from a decoded image.

use tracing::debug;

use super::buffer::DecodedImage;
use crate::error::CropError;
use crate::types::CropRectangle;

/// Copy the pixels inside `rect` into a new image.
///
/// # Errors
///
/// - `InvalidImage` / `InvalidGeometry` if the source buffer is unusable
/// - `InvalidGeometry` if `rect` is empty or reaches outside the source
pub fn extract(image: &DecodedImage, rect: CropRectangle) -> Result<DecodedImage, CropError> {
    let source = image.dimensions()?;

    if !rect.fits_within(source) {
        return Err(CropError::InvalidGeometry(format!(
            "crop {:?} does not fit inside {}x{} image",
            rect, source.width, source.height
        )));
    }

    // Fast path: full crop returns a clone
    if rect.is_full(source) {
        return Ok(image.clone());
    }

    let src_stride = image.width as usize * 3;
    let row_len = rect.width as usize * 3;
    let mut output = Vec::with_capacity(row_len * rect.height as usize);

    // Copy pixel data row by row
    for y in rect.top..rect.top + rect.height {
        let start = y as usize * src_stride + rect.left as usize * 3;
        output.extend_from_slice(&image.pixels[start..start + row_len]);
    }

    debug!(
        source_width = image.width,
        source_height = image.height,
        ?rect,
        "Extracted crop region"
    );

    Ok(DecodedImage::new(rect.width, rect.height, output))
}
