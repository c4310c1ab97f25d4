//! Error type shared by the resolver and the pixel transforms.

use thiserror::Error;

/// Errors produced while resolving or applying focal-point edits.
///
/// All of these are local validation failures of a single edit request.
/// None of them are transient, so callers should surface them to the user
/// rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CropError {
    /// The aspect ratio token was malformed or had non-positive parts.
    #[error("Invalid aspect ratio: {0}")]
    InvalidAspectRatio(String),

    /// A target dimension was still unresolved when cropping needed it.
    #[error("Missing target {0}: set it explicitly or derive it from an aspect ratio")]
    MissingDimension(&'static str),

    /// Zero-area source, zero target size, or a non-finite ratio.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A focal coordinate was non-finite or outside 0.0 to 1.0.
    #[error("Invalid focal point: {axis} = {value} (expected 0.0 to 1.0)")]
    InvalidFocalPoint { axis: char, value: f64 },

    /// The pixel buffer does not match the dimensions it claims.
    #[error("Invalid image: {0}")]
    InvalidImage(String),
}
