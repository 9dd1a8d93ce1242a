use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use watermark_core::consts::IMAGE_EXTENSION;
use watermark_core::session::Dialogs;

/// Native, blocking file pickers and message boxes.
pub struct RfdDialogs;

impl RfdDialogs {
    pub fn show_error(&mut self, title: &str, message: &str) {
        show_message(MessageLevel::Error, title, message);
    }
}

impl Dialogs for RfdDialogs {
    fn pick_image(&mut self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Select Image File")
            .add_filter("Image Files", &[IMAGE_EXTENSION])
            .pick_file()
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        FileDialog::new()
            .add_filter("PNG file", &[IMAGE_EXTENSION])
            .add_filter("All File", &["*"])
            .set_file_name(format!("watermarked.{IMAGE_EXTENSION}"))
            .save_file()
    }

    fn show_info(&mut self, title: &str, message: &str) {
        show_message(MessageLevel::Info, title, message);
    }
}

fn show_message(level: MessageLevel, title: &str, message: &str) {
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
