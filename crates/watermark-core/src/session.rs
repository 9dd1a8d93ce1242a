//! Main window state: which screen is showing, the loaded image, the current
//! watermark and the (at most one) open text settings dialog.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{debug, info};

use crate::config::WatermarkConfig;
use crate::consts::{CANVAS_SIZE, FONT_SIZE_RANGE, IMAGE_EXTENSION};
use crate::dialog::{ConfirmOutcome, TextSettingsDialog};
use crate::error::{Result, WatermarkError};
use crate::io::image_io::{load_fitted, save_image};
use crate::palette::{FontFamily, HexColor};
use crate::render;
use crate::watermark::WatermarkSpec;

pub const SAVED_TITLE: &str = "Image saved";
pub const SAVED_MESSAGE: &str = "File saved correctly.";

/// Native pickers and message boxes. All calls block until the user answers.
pub trait Dialogs {
    /// Ask for an image to open. `None` when cancelled.
    fn pick_image(&mut self) -> Option<PathBuf>;
    /// Ask where to save the result. `None` when cancelled.
    fn pick_save_path(&mut self) -> Option<PathBuf>;
    fn show_info(&mut self, title: &str, message: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    Editing,
}

#[derive(Debug, Default)]
pub struct Session {
    screen: Screen,
    image_path: Option<PathBuf>,
    preview: Option<RgbaImage>,
    watermark: Option<WatermarkSpec>,
    dialog: Option<TextSettingsDialog>,
    config: WatermarkConfig,
}

impl Session {
    pub fn new(config: WatermarkConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn config(&self) -> &WatermarkConfig {
        &self.config
    }

    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    /// The loaded image fitted to the canvas.
    pub fn preview(&self) -> Option<&RgbaImage> {
        self.preview.as_ref()
    }

    pub fn watermark(&self) -> Option<&WatermarkSpec> {
        self.watermark.as_ref()
    }

    /// Overlay text; empty until a watermark has been applied.
    pub fn watermark_text(&self) -> &str {
        self.watermark.as_ref().map_or("", |w| w.text.as_str())
    }

    pub fn text_color(&self) -> HexColor {
        self.watermark.as_ref().map_or(HexColor::BLACK, |w| w.color)
    }

    pub fn font_size(&self) -> u32 {
        self.watermark
            .as_ref()
            .map_or(*FONT_SIZE_RANGE.start(), |w| w.font_size)
    }

    pub fn font_family(&self) -> FontFamily {
        self.watermark
            .as_ref()
            .map_or(FontFamily::default(), |w| w.font_family)
    }

    /// Let the user pick an image and switch to the editing screen.
    ///
    /// Returns `Ok(false)` when not on the landing screen or when the picker
    /// was cancelled; the session is then left untouched. A load failure also
    /// leaves it on the landing screen.
    pub fn select_file(&mut self, dialogs: &mut dyn Dialogs) -> Result<bool> {
        if self.screen != Screen::Landing {
            return Ok(false);
        }
        let Some(path) = dialogs.pick_image() else {
            debug!("Open picker cancelled");
            return Ok(false);
        };
        self.load(path)?;
        Ok(true)
    }

    /// Load `path` directly, as if it had been picked.
    pub fn load(&mut self, path: PathBuf) -> Result<()> {
        let preview = load_fitted(&path, CANVAS_SIZE)?;
        info!(path = %path.display(), "Editing image");
        self.screen = Screen::Editing;
        self.preview = Some(preview);
        self.image_path = Some(path);
        self.watermark = None;
        Ok(())
    }

    /// Open the text settings dialog unless one is already open.
    ///
    /// `callback` receives the confirmed spec. Returns whether a dialog was
    /// opened.
    pub fn open_text_dialog(&mut self, callback: impl FnOnce(WatermarkSpec) + 'static) -> bool {
        if self.dialog.is_some() {
            debug!("Text settings already open");
            return false;
        }
        self.dialog = Some(TextSettingsDialog::new(callback));
        true
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut TextSettingsDialog> {
        self.dialog.as_mut()
    }

    /// Confirm the open dialog, closing it once its spec has been delivered.
    pub fn confirm_dialog(&mut self) -> Option<ConfirmOutcome> {
        let outcome = self.dialog.as_mut()?.confirm();
        if matches!(outcome, ConfirmOutcome::Applied | ConfirmOutcome::Spent) {
            self.close_dialog();
        }
        Some(outcome)
    }

    /// Close the dialog, freeing the slot for a new one.
    pub fn close_dialog(&mut self) {
        if let Some(dialog) = self.dialog.take() {
            dialog.close();
        }
    }

    pub fn apply_watermark(&mut self, spec: WatermarkSpec) {
        debug!(text = %spec.text, "Watermark updated");
        self.watermark = Some(spec);
    }

    /// Ask for a destination and write the watermarked image there.
    ///
    /// A name typed without an extension gets the image extension appended.
    /// Returns the absolute path written, or `None` when the picker was
    /// cancelled.
    pub fn save(&mut self, dialogs: &mut dyn Dialogs) -> Result<Option<PathBuf>> {
        let source = self.image_path.clone().ok_or(WatermarkError::NoImageLoaded)?;
        let Some(mut path) = dialogs.pick_save_path() else {
            debug!("Save picker cancelled");
            return Ok(None);
        };
        if path.extension().is_none() {
            path.set_extension(IMAGE_EXTENSION);
        }
        let output = render::composite(&source, self.watermark.as_ref(), &self.config)?;
        save_image(&output, &path)?;
        let abs_path = std::path::absolute(&path).unwrap_or(path);
        info!(path = %abs_path.display(), "Image saved");
        dialogs.show_info(SAVED_TITLE, SAVED_MESSAGE);
        Ok(Some(abs_path))
    }

    /// Drop everything tied to the edited image and show the landing screen.
    pub fn return_to_main(&mut self) {
        let config = std::mem::take(&mut self.config);
        *self = Self::new(config);
    }
}
