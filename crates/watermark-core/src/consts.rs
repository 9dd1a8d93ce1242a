use std::ops::RangeInclusive;

/// Side length of the square preview canvas and of every saved image.
pub const CANVAS_SIZE: u32 = 600;

/// Overlay anchor on the canvas: x is the horizontal middle of the text,
/// y is its baseline.
pub const OVERLAY_ANCHOR: (f32, f32) = (300.0, 500.0);

/// Wrap width of the overlay text in the on-screen preview.
pub const PREVIEW_WRAP_WIDTH: f32 = 500.0;

/// Selectable font sizes in the text settings dialog.
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 30..=80;

/// Font file used for rendering when no family-specific file is configured.
pub const DEFAULT_FONT_PATH: &str = "fonts/watermark.ttf";

/// Image extension accepted by the open picker and proposed by the save picker.
pub const IMAGE_EXTENSION: &str = "png";

/// Config file looked up in the working directory by the GUI.
pub const CONFIG_FILE_NAME: &str = "watermark.toml";

/// Coverage below this value is treated as empty when compositing glyphs.
pub const COVERAGE_EPSILON: f32 = 1e-3;
