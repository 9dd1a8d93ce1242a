//! Form state and confirmation rules of the text settings dialog.
//!
//! The GUI owns the widgets; this module owns what they edit and decides
//! when a confirmation is complete enough to hand a [`WatermarkSpec`] to the
//! main window.

use std::fmt;

use tracing::debug;

use crate::consts::FONT_SIZE_RANGE;
use crate::palette::{FontFamily, TextColor};
use crate::watermark::WatermarkSpec;

pub const DIALOG_TITLE: &str = "Text Menu Settings";
pub const MISSING_VALUES_TITLE: &str = "Missing Values";
pub const MISSING_VALUES_MESSAGE: &str = "Please do not leave blank spaces.\nComplete all fields.";

/// Receives the confirmed spec. Called at most once per dialog.
pub type SpecCallback = Box<dyn FnOnce(WatermarkSpec)>;

/// One input of the dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Text,
    Color,
    FontSize,
    FontFamily,
}

impl Field {
    pub const ALL: &[Self] = &[Self::Text, Self::Color, Self::FontSize, Self::FontFamily];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "Enter a text"),
            Self::Color => write!(f, "Choose a color"),
            Self::FontSize => write!(f, "Select a font size"),
            Self::FontFamily => write!(f, "Select a font"),
        }
    }
}

/// Raw values of the four inputs. Selects start unselected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextSettingsForm {
    pub text: String,
    pub color: Option<TextColor>,
    pub font_size: Option<u32>,
    pub font_family: Option<FontFamily>,
}

impl TextSettingsForm {
    /// Fields that still have no usable value, in display order.
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.text.is_empty() {
            missing.push(Field::Text);
        }
        if self.color.is_none() {
            missing.push(Field::Color);
        }
        if !self.font_size.is_some_and(|s| FONT_SIZE_RANGE.contains(&s)) {
            missing.push(Field::FontSize);
        }
        if self.font_family.is_none() {
            missing.push(Field::FontFamily);
        }
        missing
    }

    /// Build the spec if every field is filled in.
    pub fn to_spec(&self) -> Result<WatermarkSpec, Vec<Field>> {
        match (self.color, self.font_size, self.font_family) {
            (Some(color), Some(size), Some(family)) if !self.text.is_empty() => {
                WatermarkSpec::new(self.text.clone(), color.hex(), size, family)
                    .map_err(|_| vec![Field::FontSize])
            }
            _ => Err(self.missing_fields()),
        }
    }
}

/// Result of pressing "Apply changes".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The callback received the spec; the dialog should now be closed.
    Applied,
    /// Nothing was sent; the dialog stays open and shows the notice.
    Missing(Vec<Field>),
    /// The callback already fired earlier; nothing was sent.
    Spent,
}

/// A single-use text settings dialog.
pub struct TextSettingsDialog {
    pub form: TextSettingsForm,
    callback: Option<SpecCallback>,
}

impl TextSettingsDialog {
    pub fn new(callback: impl FnOnce(WatermarkSpec) + 'static) -> Self {
        Self {
            form: TextSettingsForm::default(),
            callback: Some(Box::new(callback)),
        }
    }

    /// Validate the form and, when complete, hand the spec to the callback.
    pub fn confirm(&mut self) -> ConfirmOutcome {
        if self.is_spent() {
            debug!("Text settings already applied");
            return ConfirmOutcome::Spent;
        }
        match self.form.to_spec() {
            Ok(spec) => {
                debug!(
                    text = %spec.text,
                    color = %spec.color,
                    size = spec.font_size,
                    font = %spec.font_family,
                    "Text settings confirmed"
                );
                if let Some(callback) = self.callback.take() {
                    callback(spec);
                }
                ConfirmOutcome::Applied
            }
            Err(missing) => {
                debug!(?missing, "Text settings incomplete");
                ConfirmOutcome::Missing(missing)
            }
        }
    }

    /// Whether the callback has already fired.
    pub fn is_spent(&self) -> bool {
        self.callback.is_none()
    }

    /// Destroy the dialog. Dropping has the same effect; this names the intent.
    pub fn close(self) {}
}

impl fmt::Debug for TextSettingsDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextSettingsDialog")
            .field("form", &self.form)
            .field("spent", &self.is_spent())
            .finish()
    }
}
