use serde::{Deserialize, Serialize};

use crate::consts::FONT_SIZE_RANGE;
use crate::error::{Result, WatermarkError};
use crate::palette::{FontFamily, HexColor};

/// Confirmed watermark settings: what to draw and how.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatermarkSpec {
    pub text: String,
    pub color: HexColor,
    pub font_size: u32,
    pub font_family: FontFamily,
}

impl WatermarkSpec {
    /// Build a spec, rejecting font sizes outside the selectable range.
    pub fn new(
        text: impl Into<String>,
        color: HexColor,
        font_size: u32,
        font_family: FontFamily,
    ) -> Result<Self> {
        if !FONT_SIZE_RANGE.contains(&font_size) {
            return Err(WatermarkError::InvalidFontSize {
                size: font_size,
                min: *FONT_SIZE_RANGE.start(),
                max: *FONT_SIZE_RANGE.end(),
            });
        }
        Ok(Self {
            text: text.into(),
            color,
            font_size,
            font_family,
        })
    }

    /// True when drawing this spec leaves the image untouched.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
