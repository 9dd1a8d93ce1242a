#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use watermark_core::session::Dialogs;

/// Write a solid-color PNG and return its path.
pub fn write_test_png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(&path)
        .expect("write test png");
    path
}

/// Pickers that answer from a script instead of asking a user.
#[derive(Default)]
pub struct ScriptedDialogs {
    pub images: VecDeque<Option<PathBuf>>,
    pub saves: VecDeque<Option<PathBuf>>,
    pub infos: Vec<(String, String)>,
    pub image_requests: usize,
}

impl ScriptedDialogs {
    pub fn opening(path: Option<PathBuf>) -> Self {
        Self {
            images: VecDeque::from([path]),
            ..Default::default()
        }
    }

    pub fn saving_to(mut self, path: Option<PathBuf>) -> Self {
        self.saves.push_back(path);
        self
    }
}

impl Dialogs for ScriptedDialogs {
    fn pick_image(&mut self) -> Option<PathBuf> {
        self.image_requests += 1;
        self.images.pop_front().flatten()
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        self.saves.pop_front().flatten()
    }

    fn show_info(&mut self, title: &str, message: &str) {
        self.infos.push((title.to_string(), message.to_string()));
    }
}

/// Bounding box (min_x, min_y, max_x, max_y) of pixels that differ between
/// two images of the same size.
pub fn diff_bounds(a: &RgbaImage, b: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pa) in a.enumerate_pixels() {
        if pa != b.get_pixel(x, y) {
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }
    bounds
}
