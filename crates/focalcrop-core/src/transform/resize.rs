//! Fit-mode resizing.
//!
//! [`fit_dimensions`] is the pure sizing step; [`resize_with_fit`] applies it
//! to pixels using the `image` crate's resampling.

use tracing::debug;

use super::buffer::{DecodedImage, FilterType};
use super::extract::extract;
use crate::error::CropError;
use crate::focal::div_round;
use crate::types::{CropRectangle, Dimensions, FitMode, OutputDimensions};

/// Sizes involved in one resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitLayout {
    /// Size the image is resampled to.
    pub scaled: Dimensions,
    /// Size of the final output. Larger than `scaled` when letterboxing,
    /// smaller when cover-cropping.
    pub canvas: Dimensions,
}

/// Compute how `source` maps onto `target` under `fit`.
///
/// With only one side given the other follows the source aspect ratio and
/// the fit mode does not matter. With neither given the source size is kept.
pub fn fit_dimensions(
    source: Dimensions,
    target: OutputDimensions,
    fit: FitMode,
) -> Result<FitLayout, CropError> {
    if source.is_empty() {
        return Err(CropError::InvalidGeometry(format!(
            "source image has zero area ({}x{})",
            source.width, source.height
        )));
    }

    let (sw, sh) = (source.width as u64, source.height as u64);

    let scaled = match (target.width, target.height) {
        (None, None) => source,
        (Some(w), None) => sized(w as u64, div_round(sh * w as u64, sw))?,
        (None, Some(h)) => sized(div_round(sw * h as u64, sh), h as u64)?,
        (Some(w), Some(h)) => {
            let (tw, th) = (w as u64, h as u64);
            // True when scaling to the target width leaves the height within the box
            let width_limits = tw * sh <= th * sw;
            match fit {
                FitMode::Fill => sized(tw, th)?,
                FitMode::Inside | FitMode::Contain if width_limits => {
                    sized(tw, div_round(sh * tw, sw))?
                }
                FitMode::Inside | FitMode::Contain => sized(div_round(sw * th, sh), th)?,
                FitMode::Outside | FitMode::Cover if width_limits => {
                    sized(div_round(sw * th, sh), th)?
                }
                FitMode::Outside | FitMode::Cover => sized(tw, div_round(sh * tw, sw))?,
            }
        }
    };

    let canvas = match (fit, target.width, target.height) {
        (FitMode::Cover | FitMode::Contain, Some(w), Some(h)) => Dimensions::new(w, h)?,
        _ => scaled,
    };

    Ok(FitLayout { scaled, canvas })
}

fn sized(width: u64, height: u64) -> Result<Dimensions, CropError> {
    let to_side = |v: u64| {
        u32::try_from(v.max(1)).map_err(|_| {
            CropError::InvalidGeometry(format!("resized side {} is out of range", v))
        })
    };
    Dimensions::new(to_side(width)?, to_side(height)?)
}

/// Resize `image` to `target` following `fit`.
///
/// `Cover` crops the centered overflow, `Contain` pads the remainder with
/// black, the other modes return the scaled image as is.
pub fn resize_with_fit(
    image: &DecodedImage,
    target: OutputDimensions,
    fit: FitMode,
    filter: FilterType,
) -> Result<DecodedImage, CropError> {
    let source = image.dimensions()?;
    let layout = fit_dimensions(source, target, fit)?;

    debug!(
        source_width = source.width,
        source_height = source.height,
        scaled_width = layout.scaled.width,
        scaled_height = layout.scaled.height,
        canvas_width = layout.canvas.width,
        canvas_height = layout.canvas.height,
        ?fit,
        "Resizing image"
    );

    let scaled = if layout.scaled == source {
        image.clone()
    } else {
        let rgb = image.to_rgb_image()?;
        let resized = image::imageops::resize(
            &rgb,
            layout.scaled.width,
            layout.scaled.height,
            filter.to_image_filter(),
        );
        DecodedImage::from_rgb_image(resized)
    };

    if layout.canvas == layout.scaled {
        return Ok(scaled);
    }

    match fit {
        FitMode::Cover => {
            let rect = CropRectangle {
                left: (layout.scaled.width - layout.canvas.width) / 2,
                top: (layout.scaled.height - layout.canvas.height) / 2,
                width: layout.canvas.width,
                height: layout.canvas.height,
            };
            extract(&scaled, rect)
        }
        _ => {
            let mut canvas = image::RgbImage::new(layout.canvas.width, layout.canvas.height);
            let x = (layout.canvas.width - layout.scaled.width) / 2;
            let y = (layout.canvas.height - layout.scaled.height) / 2;
            image::imageops::overlay(&mut canvas, &scaled.to_rgb_image()?, x as i64, y as i64);
            Ok(DecodedImage::from_rgb_image(canvas))
        }
    }
}
