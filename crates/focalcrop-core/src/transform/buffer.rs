//! Decoded pixel buffer and resize filter types.

use serde::{Deserialize, Serialize};

use crate::error::CropError;
use crate::types::Dimensions;

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// An already-decoded image with RGB pixel data.
///
/// Decoding happens elsewhere. This type only carries the result so crops
/// and resizes can be applied to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create an image filled with a single color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let count = width as usize * height as usize;
        let pixels = rgb.iter().copied().cycle().take(count * 3).collect();
        Self::new(width, height, pixels)
    }

    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Convert to an image::RgbImage for further processing.
    pub fn to_rgb_image(&self) -> Result<image::RgbImage, CropError> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| self.size_mismatch())
    }

    /// Validated source dimensions for the resolver.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` for a zero-area image, `InvalidImage` when the
    /// buffer length disagrees with `width * height * 3`.
    pub fn dimensions(&self) -> Result<Dimensions, CropError> {
        let dims = Dimensions::new(self.width, self.height)?;
        if self.pixels.len() != self.expected_len() {
            return Err(self.size_mismatch());
        }
        Ok(dims)
    }

    /// Read one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        self.pixels
            .get(idx..idx + 3)
            .map(|p| [p[0], p[1], p[2]])
    }

    fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }

    fn size_mismatch(&self) -> CropError {
        CropError::InvalidImage(format!(
            "{}x{} RGB image needs {} bytes, got {}",
            self.width,
            self.height,
            self.expected_len(),
            self.pixels.len()
        ))
    }
}
