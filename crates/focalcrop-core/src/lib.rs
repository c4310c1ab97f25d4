//! Focalcrop Core - focal-point crop geometry for image edits
//!
//! This crate decides how an image edit re-frames its source before resizing:
//! it derives a missing output height from an aspect-ratio request and
//! computes the crop rectangle centered on a normalized focal point.
//!
//! Fetching, decoding and encoding images are the caller's job. The
//! [`transform`] module applies a resolved plan to an already-decoded RGB
//! buffer for callers that want the whole edit done here.
//!
//! # Example
//!
//! ```ignore
//! use focalcrop_core::{resolve_edits, Dimensions, ResizeRequest};
//!
//! let request: ResizeRequest =
//!     serde_json::from_str(r#"{"width":10,"height":10,"focalX":0.5,"focalY":0.5}"#)?;
//! let plan = resolve_edits(Dimensions::new(20, 10)?, &request)?;
//! // plan.crop == Some(CropRectangle { left: 5, top: 0, width: 10, height: 10 })
//! ```

pub mod error;
pub mod focal;
pub mod transform;
pub mod types;

pub use error::CropError;
pub use focal::{derive_height, resolve_crop_rectangle, resolve_edits, resolve_output_dimensions};
pub use transform::{apply_focal_edits, DecodedImage, FilterType};
pub use types::{
    AspectRatio, CropRectangle, Dimensions, FitMode, FocalPlan, FocalPoint, OutputDimensions,
    ResizeRequest,
};
