//! Focal-point crop rectangle computation.
//!
//! The crop is the largest rectangle with the target aspect ratio that fits
//! inside the source, centered on the focal point and then pushed back inside
//! the source bounds. A cover-fit resize of that region never upscales beyond
//! source resolution.
//!
//! # Rounding
//!
//! - Crop side length: integer half-up division, never below one pixel
//! - Position: clamped to `[0, source - crop]` first, then rounded half away
//!   from zero. The clamp bounds are integers, so rounding stays in range.

use tracing::{debug, trace};

use crate::error::CropError;
use crate::types::{CropRectangle, Dimensions, FocalPoint, OutputDimensions};

/// Compute the region of `source` to extract before resizing to `target`.
///
/// Returns `Ok(None)` when either focal coordinate is absent. That is the
/// designed no-op path, not an error.
///
/// # Errors
///
/// - `InvalidFocalPoint` if a coordinate is non-finite or outside 0.0 to 1.0
/// - `InvalidGeometry` if the source has zero area or a target side is zero
/// - `MissingDimension` if the target width or height is still unresolved
pub fn resolve_crop_rectangle(
    source: Dimensions,
    target: OutputDimensions,
    focal: FocalPoint,
) -> Result<Option<CropRectangle>, CropError> {
    let Some((focal_x, focal_y)) = focal.coordinates() else {
        trace!(?focal, "Focal point incomplete, skipping focal crop");
        return Ok(None);
    };

    validate_coordinate('x', focal_x)?;
    validate_coordinate('y', focal_y)?;

    if source.is_empty() {
        return Err(CropError::InvalidGeometry(format!(
            "source image has zero area ({}x{})",
            source.width, source.height
        )));
    }

    let (target_width, target_height) = target.require_both()?;
    if target_width == 0 || target_height == 0 {
        return Err(CropError::InvalidGeometry(format!(
            "target size {}x{} has a zero side",
            target_width, target_height
        )));
    }

    let (width, height) = crop_size(source, target_width, target_height);
    let left = place(focal_x, source.width, width);
    let top = place(focal_y, source.height, height);

    let rect = CropRectangle {
        left,
        top,
        width,
        height,
    };
    debug!(
        source_width = source.width,
        source_height = source.height,
        target_width,
        target_height,
        focal_x,
        focal_y,
        ?rect,
        "Resolved focal crop rectangle"
    );

    Ok(Some(rect))
}

fn validate_coordinate(axis: char, value: f64) -> Result<(), CropError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CropError::InvalidFocalPoint { axis, value })
    }
}

/// Largest `target`-shaped box inside `source`.
///
/// Branches on cross-multiplied products so the comparison is exact. Equal
/// aspect ratios take the full-width branch.
fn crop_size(source: Dimensions, target_width: u32, target_height: u32) -> (u32, u32) {
    let (sw, sh) = (source.width as u64, source.height as u64);
    let (tw, th) = (target_width as u64, target_height as u64);

    if sw * th > tw * sh {
        // Source is wider than the target: keep the full height
        let width = div_round(sh * tw, th).clamp(1, sw);
        (width as u32, source.height)
    } else {
        // Source is taller than or equal to the target: keep the full width
        let height = div_round(sw * th, tw).clamp(1, sh);
        (source.width, height as u32)
    }
}

/// `round(n / d)` with halves rounded up.
pub(crate) fn div_round(n: u64, d: u64) -> u64 {
    ((2 * n as u128 + d as u128) / (2 * d as u128)) as u64
}

/// Top-left offset along one axis that centers `crop` on `focal`.
fn place(focal: f64, source: u32, crop: u32) -> u32 {
    let ideal = focal * source as f64 - crop as f64 / 2.0;
    let max = source.saturating_sub(crop) as f64;
    ideal.clamp(0.0, max).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    fn target(width: u32, height: u32) -> OutputDimensions {
        OutputDimensions::new(Some(width), Some(height))
    }

    fn rect(left: u32, top: u32, width: u32, height: u32) -> CropRectangle {
        CropRectangle {
            left,
            top,
            width,
            height,
        }
    }

    #[test]
    fn test_square_source_origin_focal() {
        let crop = resolve_crop_rectangle(dims(10, 10), target(5, 5), FocalPoint::new(0.0, 0.0))
            .unwrap();
        assert_eq!(crop, Some(rect(0, 0, 10, 10)));
    }

    #[test]
    fn test_wide_source_center_focal() {
        let crop = resolve_crop_rectangle(dims(20, 10), target(10, 10), FocalPoint::new(0.5, 0.5))
            .unwrap();
        assert_eq!(crop, Some(rect(5, 0, 10, 10)));
    }

    #[test]
    fn test_tall_source_keeps_full_width() {
        // 100x400 into 16:9: full width, height = round(100 * 9 / 16) = 56
        let crop =
            resolve_crop_rectangle(dims(100, 400), target(160, 90), FocalPoint::new(0.5, 0.5))
                .unwrap()
                .unwrap();
        assert_eq!(crop.width, 100);
        assert_eq!(crop.height, 56);
        assert_eq!(crop.left, 0);
        // 0.5 * 400 - 28 = 172
        assert_eq!(crop.top, 172);
    }

    #[test]
    fn test_focal_near_edge_is_clamped() {
        let crop = resolve_crop_rectangle(dims(20, 10), target(10, 10), FocalPoint::new(1.0, 1.0))
            .unwrap();
        assert_eq!(crop, Some(rect(10, 0, 10, 10)));

        let crop = resolve_crop_rectangle(dims(20, 10), target(10, 10), FocalPoint::new(0.0, 0.0))
            .unwrap();
        assert_eq!(crop, Some(rect(0, 0, 10, 10)));
    }

    #[test]
    fn test_off_center_focal() {
        // 1000x500 into 1:1: crop 500x500, ideal left = 0.3 * 1000 - 250 = 50
        let crop =
            resolve_crop_rectangle(dims(1000, 500), target(200, 200), FocalPoint::new(0.3, 0.7))
                .unwrap();
        assert_eq!(crop, Some(rect(50, 0, 500, 500)));
    }

    #[test]
    fn test_fractional_position_rounds() {
        // 21x10 into 1:1: crop 10x10, ideal left = 0.5 * 21 - 5 = 5.5
        let crop = resolve_crop_rectangle(dims(21, 10), target(1, 1), FocalPoint::new(0.5, 0.5))
            .unwrap();
        assert_eq!(crop, Some(rect(6, 0, 10, 10)));
    }

    #[test]
    fn test_equal_aspect_covers_source() {
        let crop =
            resolve_crop_rectangle(dims(1600, 900), target(160, 90), FocalPoint::new(0.9, 0.1))
                .unwrap();
        assert_eq!(crop, Some(rect(0, 0, 1600, 900)));
    }

    #[test]
    fn test_extreme_target_keeps_one_pixel() {
        // 10x10 into 1x1000: round(10 * 1 / 1000) = 0, raised to 1
        let crop =
            resolve_crop_rectangle(dims(10, 10), target(1, 1000), FocalPoint::new(0.5, 0.5))
                .unwrap()
                .unwrap();
        assert_eq!(crop.width, 1);
        assert_eq!(crop.height, 10);
        assert!(crop.fits_within(dims(10, 10)));
    }

    #[test]
    fn test_partial_focal_point_is_noop() {
        let partial = [
            FocalPoint {
                x: None,
                y: Some(0.5),
            },
            FocalPoint {
                x: Some(0.5),
                y: None,
            },
            FocalPoint::default(),
        ];
        for focal in partial {
            let crop = resolve_crop_rectangle(dims(10, 10), target(5, 5), focal).unwrap();
            assert_eq!(crop, None);
        }
    }

    #[test]
    fn test_partial_focal_point_skips_validation() {
        // Nothing else is checked on the no-op path
        let focal = FocalPoint {
            x: None,
            y: Some(0.5),
        };
        let crop = resolve_crop_rectangle(
            Dimensions {
                width: 0,
                height: 0,
            },
            OutputDimensions::default(),
            focal,
        )
        .unwrap();
        assert_eq!(crop, None);
    }

    #[test]
    fn test_missing_target_dimension() {
        let result = resolve_crop_rectangle(
            dims(10, 10),
            OutputDimensions::new(Some(5), None),
            FocalPoint::new(0.5, 0.5),
        );
        assert_eq!(result, Err(CropError::MissingDimension("height")));

        let result = resolve_crop_rectangle(
            dims(10, 10),
            OutputDimensions::new(None, Some(5)),
            FocalPoint::new(0.5, 0.5),
        );
        assert_eq!(result, Err(CropError::MissingDimension("width")));
    }

    #[test]
    fn test_zero_area_source_is_invalid() {
        let result = resolve_crop_rectangle(
            Dimensions {
                width: 0,
                height: 10,
            },
            target(5, 5),
            FocalPoint::new(0.5, 0.5),
        );
        assert!(matches!(result, Err(CropError::InvalidGeometry(_))));
    }

    #[test]
    fn test_zero_target_is_invalid() {
        let result = resolve_crop_rectangle(dims(10, 10), target(5, 0), FocalPoint::new(0.5, 0.5));
        assert!(matches!(result, Err(CropError::InvalidGeometry(_))));

        let result = resolve_crop_rectangle(dims(10, 10), target(0, 5), FocalPoint::new(0.5, 0.5));
        assert_eq!(
            result,
            Err(CropError::InvalidGeometry(
                "target size 0x5 has a zero side".to_string()
            ))
        );
    }

    #[test]
    fn test_out_of_range_focal_is_invalid() {
        let result = resolve_crop_rectangle(dims(10, 10), target(5, 5), FocalPoint::new(1.2, 0.5));
        assert_eq!(
            result,
            Err(CropError::InvalidFocalPoint {
                axis: 'x',
                value: 1.2
            })
        );

        let result =
            resolve_crop_rectangle(dims(10, 10), target(5, 5), FocalPoint::new(0.5, -0.1));
        assert!(matches!(
            result,
            Err(CropError::InvalidFocalPoint { axis: 'y', .. })
        ));
    }

    #[test]
    fn test_nan_focal_is_invalid() {
        let result =
            resolve_crop_rectangle(dims(10, 10), target(5, 5), FocalPoint::new(f64::NAN, 0.5));
        assert!(matches!(
            result,
            Err(CropError::InvalidFocalPoint { axis: 'x', .. })
        ));
    }

    #[test]
    fn test_div_round() {
        assert_eq!(div_round(10, 4), 3); // 2.5 -> 3
        assert_eq!(div_round(9, 4), 2); // 2.25 -> 2
        assert_eq!(div_round(0, 7), 0);
        assert_eq!(div_round(u64::MAX, 1), u64::MAX);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
