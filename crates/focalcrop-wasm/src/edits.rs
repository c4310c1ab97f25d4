//! Focal-point edit bindings.
//!
//! Accepts the edits object JavaScript callers already build for an image
//! request:
//!
//! ```typescript
//! const edits = {
//!   resize: { width: 100, fit: "inside" },
//!   aspectRatio: "16:9",
//!   focalX: 0.5,
//!   focalY: 0.3,
//! };
//! const plan = resolve_focal_edits(image.width, image.height, edits);
//! if (plan.crop) {
//!   pipeline.extract(plan.crop);
//! }
//! pipeline.resize({ width: plan.width, height: plan.height, fit: plan.fit });
//! ```

use crate::types::{filter_from_u8, JsDecodedImage};
use focalcrop_core::{
    AspectRatio, CropError, CropRectangle, Dimensions, FitMode, FocalPlan, ResizeRequest,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Resize block of the edits object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JsResize {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fit: Option<FitMode>,
}

/// Edits object as sent from TypeScript.
///
/// `focalX`/`focalY` may be `null` or missing; cropping only happens when
/// both are numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JsImageEdits {
    pub resize: Option<JsResize>,
    pub aspect_ratio: Option<String>,
    pub focal_x: Option<f64>,
    pub focal_y: Option<f64>,
}

impl TryFrom<JsImageEdits> for ResizeRequest {
    type Error = CropError;

    fn try_from(edits: JsImageEdits) -> Result<Self, Self::Error> {
        let resize = edits.resize.unwrap_or_default();
        let aspect_ratio = edits
            .aspect_ratio
            .as_deref()
            .map(str::parse::<AspectRatio>)
            .transpose()?;

        Ok(ResizeRequest {
            width: resize.width,
            height: resize.height,
            fit: resize.fit,
            aspect_ratio,
            focal_x: edits.focal_x,
            focal_y: edits.focal_y,
        })
    }
}

/// Resolved plan returned to TypeScript.
///
/// `width`/`height`/`fit` are the values the caller's resize step should use;
/// `crop` is present only when focal cropping applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsFocalPlan {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fit: Option<FitMode>,
    pub crop: Option<CropRectangle>,
}

impl JsFocalPlan {
    fn new(plan: &FocalPlan, request: &ResizeRequest) -> Self {
        let mut merged = request.clone();
        merged.apply_plan(plan);
        Self {
            width: merged.width,
            height: merged.height,
            fit: merged.fit,
            crop: plan.crop,
        }
    }
}

pub(crate) fn resolve(
    source_width: u32,
    source_height: u32,
    edits: JsImageEdits,
) -> Result<JsFocalPlan, CropError> {
    let request = ResizeRequest::try_from(edits)?;
    let source = Dimensions::new(source_width, source_height)?;
    let plan = focalcrop_core::resolve_edits(source, &request)?;
    Ok(JsFocalPlan::new(&plan, &request))
}

/// Resolve an edits object against the source image size.
///
/// # Arguments
///
/// * `source_width` - Width of the decoded source image
/// * `source_height` - Height of the decoded source image
/// * `edits` - `{ resize: { width, height, fit }, aspectRatio, focalX, focalY }`
///
/// # Returns
///
/// `{ width, height, fit, crop }` where `crop` is
/// `{ left, top, width, height }` in source pixels, or an error string for a
/// malformed ratio, missing dimension, bad focal point or degenerate size.
#[wasm_bindgen]
pub fn resolve_focal_edits(
    source_width: u32,
    source_height: u32,
    edits: JsValue,
) -> Result<JsValue, JsValue> {
    let edits: JsImageEdits = serde_wasm_bindgen::from_value(edits)
        .map_err(|e| crate::report_error("Invalid edits object", e))?;

    let plan = resolve(source_width, source_height, edits)
        .map_err(|e| crate::report_error("Could not resolve focal edits", e))?;

    serde_wasm_bindgen::to_value(&plan)
        .map_err(|e| crate::report_error("Could not serialize focal plan", e))
}

/// Resolve an edits object and apply it to an image.
///
/// Extracts the focal crop (if any) and resizes with the effective fit mode.
///
/// # Arguments
///
/// * `image` - Source image
/// * `edits` - Same shape as for `resolve_focal_edits`
/// * `filter` - 0 = Nearest, 1 = Bilinear, 2 = Lanczos3
#[wasm_bindgen]
pub fn apply_focal_edits(
    image: &JsDecodedImage,
    edits: JsValue,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    let edits: JsImageEdits = serde_wasm_bindgen::from_value(edits)
        .map_err(|e| crate::report_error("Invalid edits object", e))?;

    apply(image, edits, filter).map_err(|e| crate::report_error("Could not apply focal edits", e))
}

fn apply(
    image: &JsDecodedImage,
    edits: JsImageEdits,
    filter: u8,
) -> Result<JsDecodedImage, CropError> {
    let request = ResizeRequest::try_from(edits)?;
    let (output, _) =
        focalcrop_core::apply_focal_edits(&image.to_decoded(), &request, filter_from_u8(filter))?;
    Ok(JsDecodedImage::from_decoded(output))
}
