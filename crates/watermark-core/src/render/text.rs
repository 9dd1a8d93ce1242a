use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use crate::consts::COVERAGE_EPSILON;
use crate::palette::HexColor;

/// A single line of glyphs positioned from x = 0 along the baseline.
#[derive(Clone, Debug, Default)]
pub struct LineLayout {
    pub glyphs: Vec<(GlyphId, f32)>,
    /// Total horizontal advance of the line.
    pub width: f32,
}

/// Lay out `text` as one line, applying kerning between neighbours.
/// Control characters (including newlines) are skipped.
pub fn layout_line(font: &FontArc, text: &str, font_size: f32) -> LineLayout {
    let scaled = font.as_scaled(PxScale::from(font_size));
    let mut glyphs = Vec::new();
    let mut cursor_x = 0.0f32;
    let mut last_glyph: Option<GlyphId> = None;

    for ch in text.chars().filter(|c| !c.is_control()) {
        let glyph_id = font.glyph_id(ch);
        if let Some(prev) = last_glyph {
            cursor_x += scaled.kern(prev, glyph_id);
        }
        glyphs.push((glyph_id, cursor_x));
        cursor_x += scaled.h_advance(glyph_id);
        last_glyph = Some(glyph_id);
    }

    LineLayout {
        glyphs,
        width: cursor_x,
    }
}

/// Draw `text` so that its horizontal middle sits on `anchor.0` and its
/// baseline on `anchor.1`. Pixels falling outside the image are dropped.
pub fn draw_text_anchored(
    img: &mut RgbaImage,
    font: &FontArc,
    text: &str,
    font_size: f32,
    anchor: (f32, f32),
    color: HexColor,
) {
    let layout = layout_line(font, text, font_size);
    if layout.glyphs.is_empty() {
        return;
    }

    let origin_x = anchor.0 - layout.width * 0.5;
    let baseline_y = anchor.1;
    let (img_w, img_h) = img.dimensions();
    let scale = PxScale::from(font_size);

    for &(glyph_id, gx) in &layout.glyphs {
        let glyph = glyph_id.with_scale_and_position(scale, point(origin_x + gx, baseline_y));
        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|px, py, coverage| {
            let x = bounds.min.x as i64 + px as i64;
            let y = bounds.min.y as i64 + py as i64;
            if x < 0 || y < 0 || x >= img_w as i64 || y >= img_h as i64 {
                return;
            }
            blend_pixel(img.get_pixel_mut(x as u32, y as u32), color, coverage);
        });
    }
}

/// Source-over blend of an opaque color with the given coverage.
fn blend_pixel(dst: &mut Rgba<u8>, color: HexColor, coverage: f32) {
    let a = coverage.clamp(0.0, 1.0);
    if a < COVERAGE_EPSILON {
        return;
    }
    let src = color.to_rgba();
    for c in 0..3 {
        let v = src[c] as f32 * a + dst.0[c] as f32 * (1.0 - a);
        dst.0[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    let alpha = 255.0 * a + dst.0[3] as f32 * (1.0 - a);
    dst.0[3] = alpha.round().clamp(0.0, 255.0) as u8;
}
