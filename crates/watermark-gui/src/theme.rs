use egui::Color32;

/// Window background (`#fcf3cf`).
pub const BACKGROUND: Color32 = Color32::from_rgb(0xfc, 0xf3, 0xcf);

/// Canvas fill behind the logo and preview (`#f6ddcc`).
pub const FRONT: Color32 = Color32::from_rgb(0xf6, 0xdd, 0xcc);

pub const LOGO: Color32 = Color32::from_rgb(0xe5, 0x98, 0x66);

pub const WINDOW_PADDING: f32 = 40.0;

pub const BUTTON_WIDTH: f32 = 110.0;

pub const WINDOW_SIZE: [f32; 2] = [820.0, 900.0];

pub const DIALOG_SIZE: [f32; 2] = [500.0, 300.0];
