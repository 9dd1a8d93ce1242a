use std::path::Path;

use ab_glyph::{FontArc, FontRef};
use tracing::{debug, warn};

use crate::config::WatermarkConfig;
use crate::error::{Result, WatermarkError};
use crate::palette::FontFamily;

/// Read a font file, rejecting anything that does not parse as a font.
pub fn read_font_file(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path)?;
    FontRef::try_from_slice(&bytes).map_err(|e| WatermarkError::Font {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(bytes)
}

/// Load a TrueType/OpenType font from disk.
pub fn load_font_file(path: &Path) -> Result<FontArc> {
    let bytes = read_font_file(path)?;
    FontArc::try_from_vec(bytes).map_err(|e| WatermarkError::Font {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// First candidate for `family` that reads as a font, with its path.
pub fn find_font_file(config: &WatermarkConfig, family: FontFamily) -> Option<(&Path, Vec<u8>)> {
    config.font_candidates(family).into_iter().find_map(|path| match read_font_file(path) {
        Ok(bytes) => Some((path, bytes)),
        Err(e) => {
            warn!(family = %family, "Font unavailable, trying next: {e}");
            None
        }
    })
}

/// The font bundled with the binary, used when no configured file loads.
pub fn default_font() -> Result<FontArc> {
    FontArc::try_from_slice(epaint_default_fonts::UBUNTU_LIGHT).map_err(|e| WatermarkError::Font {
        path: "<bundled>".into(),
        reason: e.to_string(),
    })
}

/// Pick the rendering font for `family`.
///
/// Tries the family's configured file, then the configured default file,
/// then the bundled font. Unreadable files are logged and skipped.
pub fn resolve_font(config: &WatermarkConfig, family: FontFamily) -> Result<FontArc> {
    if let Some((path, bytes)) = find_font_file(config, family) {
        debug!(family = %family, path = %path.display(), "Using font file");
        return FontArc::try_from_vec(bytes).map_err(|e| WatermarkError::Font {
            path: path.to_path_buf(),
            reason: e.to_string(),
        });
    }
    debug!(family = %family, "Falling back to bundled font");
    default_font()
}
