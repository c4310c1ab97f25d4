//! Image handle passed between JavaScript and `apply_focal_edits`.

use focalcrop_core::{DecodedImage, FilterType};
use wasm_bindgen::prelude::*;

/// RGB source or result image for `apply_focal_edits`.
///
/// `pixels` is row-major RGB, 3 bytes per pixel. Construction does not check
/// the buffer; a buffer that is not exactly `width * height * 3` bytes makes
/// `apply_focal_edits` fail with an `InvalidImage` error.
#[wasm_bindgen]
pub struct JsDecodedImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Wrap a decoded frame, e.g. canvas `ImageData` with the alpha bytes
    /// stripped.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsDecodedImage {
        JsDecodedImage {
            width,
            height,
            pixels,
        }
    }

    /// Width in pixels. For a result this is the resize width, or the crop
    /// width when only a focal crop was applied.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Length of the RGB buffer in bytes.
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Copy the RGB buffer out to a `Uint8Array`.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        let DecodedImage {
            width,
            height,
            pixels,
        } = img;
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Core image for the transform pipeline. The buffer length is checked
    /// there, not here.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage::new(self.width, self.height, self.pixels.clone())
    }
}

/// Resampling filter for the resize step: 0 = nearest, 2 = lanczos3,
/// anything else bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::default(),
    }
}
