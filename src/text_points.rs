use crate::constants::{
    TEXT_ALPHA_THRESHOLD, TEXT_CANVAS_H, TEXT_CANVAS_W, TEXT_FONT, TEXT_SAMPLE_STEP,
};
use crate::mask;
use glam::Vec3;
use lounge_core::{PointCloudError, PointCloudSampler};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Rasterizes text on an offscreen 2D canvas and samples the lit pixels.
pub struct CanvasTextSampler {
    document: web::Document,
}

impl CanvasTextSampler {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn context(&self) -> Result<web::CanvasRenderingContext2d, PointCloudError> {
        let unavailable = |e: JsValue| PointCloudError::Unavailable(format!("{:?}", e));
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(unavailable)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| PointCloudError::Unavailable("not a canvas".into()))?;
        canvas.set_width(TEXT_CANVAS_W);
        canvas.set_height(TEXT_CANVAS_H);
        canvas
            .get_context("2d")
            .map_err(unavailable)?
            .ok_or_else(|| PointCloudError::Unavailable("no 2d context".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| PointCloudError::Unavailable("unexpected context type".into()))
    }
}

impl PointCloudSampler for CanvasTextSampler {
    fn sample(&self, text: &str) -> Result<Vec<Vec3>, PointCloudError> {
        let ctx = self.context()?;
        let (w, h) = (TEXT_CANVAS_W as f64, TEXT_CANVAS_H as f64);
        ctx.set_font(TEXT_FONT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        #[allow(deprecated)]
        ctx.set_fill_style(&JsValue::from_str("#ffffff"));
        ctx.fill_text(text, w / 2.0, h / 2.0)
            .map_err(|e| PointCloudError::Unavailable(format!("{:?}", e)))?;
        let image = ctx
            .get_image_data(0.0, 0.0, w, h)
            .map_err(|e| PointCloudError::Unavailable(format!("{:?}", e)))?;
        let points = mask::points_from_alpha(
            &image.data().0,
            TEXT_CANVAS_W as usize,
            TEXT_CANVAS_H as usize,
            TEXT_SAMPLE_STEP,
            TEXT_ALPHA_THRESHOLD,
        );
        if points.is_empty() {
            return Err(PointCloudError::Empty);
        }
        Ok(points)
    }
}
