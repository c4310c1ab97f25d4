//! Applying a resolved plan to decoded pixels.
//!
//! # Transform Order
//!
//! 1. Extract the focal crop region, when the plan has one
//! 2. Resize to the resolved output size using the effective fit mode
//!
//! # Coordinate System
//!
//! - Crop rectangles are in source pixel coordinates
//! - Origin is top-left corner

mod buffer;
mod extract;
mod resize;

pub use buffer::{DecodedImage, FilterType};
pub use extract::extract;
pub use resize::{fit_dimensions, resize_with_fit, FitLayout};

use crate::error::CropError;
use crate::focal::resolve_edits;
use crate::types::{FocalPlan, ResizeRequest};

/// Resolve `request` against `image` and apply the result.
///
/// The fit override from the plan wins over the requested fit mode, which
/// in turn defaults to [`FitMode::Cover`](crate::FitMode::Cover).
///
/// Returns the transformed image together with the plan that produced it.
pub fn apply_focal_edits(
    image: &DecodedImage,
    request: &ResizeRequest,
    filter: FilterType,
) -> Result<(DecodedImage, FocalPlan), CropError> {
    let plan = resolve_edits(image.dimensions()?, request)?;

    let cropped = match plan.crop {
        Some(rect) => extract(image, rect)?,
        None => image.clone(),
    };

    let fit = plan.fit.or(request.fit).unwrap_or_default();
    let output = resize_with_fit(&cropped, plan.output, fit, filter)?;

    Ok((output, plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CropRectangle, FitMode};

    /// Left half red, right half blue.
    fn split_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..height {
            for x in 0..width {
                if x < width / 2 {
                    pixels.extend_from_slice(&[255, 0, 0]);
                } else {
                    pixels.extend_from_slice(&[0, 0, 255]);
                }
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_focal_on_right_keeps_right_content() {
        let img = split_image(40, 10);
        let request = ResizeRequest {
            width: Some(10),
            height: Some(10),
            focal_x: Some(1.0),
            focal_y: Some(0.5),
            ..Default::default()
        };

        let (output, plan) = apply_focal_edits(&img, &request, FilterType::Nearest).unwrap();
        assert_eq!(
            plan.crop,
            Some(CropRectangle {
                left: 30,
                top: 0,
                width: 10,
                height: 10
            })
        );
        assert_eq!((output.width, output.height), (10, 10));
        assert_eq!(output.pixel(0, 0), Some([0, 0, 255]));
        assert_eq!(output.pixel(9, 9), Some([0, 0, 255]));
    }

    #[test]
    fn test_focal_on_left_keeps_left_content() {
        let img = split_image(40, 10);
        let request = ResizeRequest {
            width: Some(5),
            height: Some(5),
            focal_x: Some(0.0),
            focal_y: Some(0.0),
            ..Default::default()
        };

        let (output, _) = apply_focal_edits(&img, &request, FilterType::Nearest).unwrap();
        assert_eq!((output.width, output.height), (5, 5));
        assert_eq!(output.pixel(4, 4), Some([255, 0, 0]));
    }

    #[test]
    fn test_aspect_ratio_only_resizes() {
        let img = DecodedImage::filled(2, 2, [128, 128, 128]);
        let request = ResizeRequest {
            width: Some(100),
            aspect_ratio: Some("16:9".parse().unwrap()),
            ..Default::default()
        };

        let (output, plan) = apply_focal_edits(&img, &request, FilterType::Bilinear).unwrap();
        assert_eq!(plan.output.height, Some(56));
        assert_eq!(plan.crop, None);
        // No focal crop, default cover fit fills the derived box
        assert_eq!((output.width, output.height), (100, 56));
    }

    #[test]
    fn test_requested_fit_used_without_focal() {
        let img = DecodedImage::filled(200, 100, [1, 1, 1]);
        let request = ResizeRequest {
            width: Some(50),
            height: Some(50),
            fit: Some(FitMode::Inside),
            ..Default::default()
        };

        let (output, plan) = apply_focal_edits(&img, &request, FilterType::Bilinear).unwrap();
        assert_eq!(plan.fit, None);
        assert_eq!((output.width, output.height), (50, 25));
    }

    #[test]
    fn test_focal_overrides_requested_fit() {
        let img = DecodedImage::filled(200, 100, [1, 1, 1]);
        let request = ResizeRequest {
            width: Some(50),
            height: Some(50),
            fit: Some(FitMode::Inside),
            focal_x: Some(0.5),
            focal_y: Some(0.5),
            ..Default::default()
        };

        let (output, plan) = apply_focal_edits(&img, &request, FilterType::Bilinear).unwrap();
        assert_eq!(plan.fit, Some(FitMode::Cover));
        assert_eq!((output.width, output.height), (50, 50));
    }

    #[test]
    fn test_invalid_buffer_is_rejected() {
        let img = DecodedImage::new(10, 10, vec![0u8; 3]);
        let result = apply_focal_edits(&img, &ResizeRequest::new(), FilterType::Bilinear);
        assert!(matches!(result, Err(CropError::InvalidImage(_))));
    }
}
