pub mod font;
pub mod text;

use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::config::WatermarkConfig;
use crate::consts::{CANVAS_SIZE, OVERLAY_ANCHOR};
use crate::error::Result;
use crate::io::image_io::load_fitted;
use crate::watermark::WatermarkSpec;

/// Draw `spec` onto `img` at the canvas overlay anchor.
pub fn apply_watermark(img: &mut RgbaImage, spec: &WatermarkSpec, config: &WatermarkConfig) -> Result<()> {
    if spec.is_blank() {
        debug!("Blank watermark, nothing to draw");
        return Ok(());
    }
    let font = font::resolve_font(config, spec.font_family)?;
    text::draw_text_anchored(
        img,
        &font,
        &spec.text,
        spec.font_size as f32,
        OVERLAY_ANCHOR,
        spec.color,
    );
    Ok(())
}

/// Re-open `source` at canvas resolution and draw the watermark, if any.
pub fn composite(
    source: &Path,
    spec: Option<&WatermarkSpec>,
    config: &WatermarkConfig,
) -> Result<RgbaImage> {
    let mut img = load_fitted(source, CANVAS_SIZE)?;
    if let Some(spec) = spec {
        apply_watermark(&mut img, spec, config)?;
    }
    Ok(img)
}
