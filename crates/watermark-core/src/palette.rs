use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WatermarkError;

/// An opaque RGB color written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = WatermarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WatermarkError::InvalidColor(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for HexColor {
    type Error = WatermarkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

/// Named watermark colors offered by the text settings dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextColor {
    Red,
    Blue,
    Yellow,
    Black,
    White,
}

impl TextColor {
    pub const ALL: &[Self] = &[Self::Red, Self::Blue, Self::Yellow, Self::Black, Self::White];

    pub fn hex(self) -> HexColor {
        match self {
            Self::Red => HexColor::new(0xa3, 0x24, 0x24),
            Self::Blue => HexColor::new(0x24, 0x24, 0xa3),
            Self::Yellow => HexColor::new(0xe8, 0xff, 0x00),
            Self::Black => HexColor::new(0x00, 0x00, 0x00),
            Self::White => HexColor::new(0xff, 0xff, 0xff),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Black => "Black",
            Self::White => "White",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextColor {
    type Err = WatermarkError;

    /// Case-insensitive lookup by palette name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WatermarkError::UnknownColor(s.to_string()))
    }
}

/// Font families offered by the text settings dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    Verdana,
    TimesNewRoman,
    CourierNew,
    Georgia,
    ComicSansMs,
    TrebuchetMs,
    Impact,
    LucidaConsole,
    Tahoma,
}

impl FontFamily {
    pub const ALL: &[Self] = &[
        Self::Arial,
        Self::Verdana,
        Self::TimesNewRoman,
        Self::CourierNew,
        Self::Georgia,
        Self::ComicSansMs,
        Self::TrebuchetMs,
        Self::Impact,
        Self::LucidaConsole,
        Self::Tahoma,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Arial => "Arial",
            Self::Verdana => "Verdana",
            Self::TimesNewRoman => "Times New Roman",
            Self::CourierNew => "Courier New",
            Self::Georgia => "Georgia",
            Self::ComicSansMs => "Comic Sans MS",
            Self::TrebuchetMs => "Trebuchet MS",
            Self::Impact => "Impact",
            Self::LucidaConsole => "Lucida Console",
            Self::Tahoma => "Tahoma",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontFamily {
    type Err = WatermarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WatermarkError::UnknownFont(s.to_string()))
    }
}
