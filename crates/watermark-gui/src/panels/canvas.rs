use watermark_core::consts::{CANVAS_SIZE, OVERLAY_ANCHOR, PREVIEW_WRAP_WIDTH};
use watermark_core::palette::HexColor;
use watermark_core::session::Session;

use crate::fonts::PreviewFonts;
use crate::theme;

/// Reserve the fixed-size canvas and paint its background.
pub fn allocate(ui: &mut egui::Ui) -> egui::Rect {
    let side = CANVAS_SIZE as f32;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    ui.painter().rect_filled(rect, 0.0, theme::FRONT);
    rect
}

/// Map a point in canvas pixels to screen space.
pub fn canvas_pos(rect: egui::Rect, x: f32, y: f32) -> egui::Pos2 {
    rect.min + egui::vec2(x, y)
}

pub fn paint_title(painter: &egui::Painter, rect: egui::Rect) {
    painter.text(
        canvas_pos(rect, 300.0, 100.0),
        egui::Align2::CENTER_CENTER,
        "Add a Watermark",
        egui::FontId::proportional(30.0),
        egui::Color32::from_gray(20),
    );
}

pub fn paint_logo(painter: &egui::Painter, rect: egui::Rect) {
    let center = canvas_pos(rect, 300.0, 300.0);
    painter.circle_filled(center, 90.0, theme::LOGO);
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        "W",
        egui::FontId::proportional(96.0),
        egui::Color32::WHITE,
    );
}

pub fn paint_image(painter: &egui::Painter, rect: egui::Rect, texture: &egui::TextureHandle) {
    painter.image(
        texture.id(),
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Live preview of the watermark text: centred on the overlay anchor with
/// the first line's baseline on it, like the saved image.
pub fn paint_overlay(
    painter: &egui::Painter,
    rect: egui::Rect,
    session: &Session,
    fonts: &PreviewFonts,
) {
    let text = session.watermark_text();
    if text.is_empty() {
        return;
    }
    let color = to_color32(session.text_color());
    let font = fonts.font_id(session.font_family(), session.font_size() as f32);
    let galley = painter.layout(text.to_owned(), font, color, PREVIEW_WRAP_WIDTH);
    let ascent = galley
        .rows
        .first()
        .and_then(|row| row.glyphs.first())
        .map_or(galley.size().y, |glyph| glyph.font_ascent);
    let anchor = canvas_pos(rect, OVERLAY_ANCHOR.0, OVERLAY_ANCHOR.1);
    let pos = anchor - egui::vec2(galley.size().x / 2.0, ascent);
    painter.galley(pos, galley, color);
}

pub fn to_color32(color: HexColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}
