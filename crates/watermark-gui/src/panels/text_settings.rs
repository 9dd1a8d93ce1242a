use watermark_core::consts::FONT_SIZE_RANGE;
use watermark_core::dialog::{ConfirmOutcome, DIALOG_TITLE, MISSING_VALUES_MESSAGE, MISSING_VALUES_TITLE};
use watermark_core::palette::{FontFamily, TextColor};
use watermark_core::session::Dialogs;

use crate::app::WatermarkApp;
use crate::panels::helpers::option_combo;
use crate::theme;

enum DialogAction {
    None,
    Apply,
    Close,
}

/// Modal text settings window; shown while the session has a dialog open.
pub fn show(ctx: &egui::Context, app: &mut WatermarkApp) {
    let Some(dialog) = app.session.dialog_mut() else {
        return;
    };
    let form = &mut dialog.form;
    let font_sizes: Vec<u32> = FONT_SIZE_RANGE.collect();
    let inner = theme::DIALOG_SIZE[0] - 2.0 * theme::WINDOW_PADDING;

    let response = egui::Modal::new(egui::Id::new("text_settings")).show(ctx, |ui| {
        ui.set_width(inner);
        ui.set_min_height(theme::DIALOG_SIZE[1] - 2.0 * theme::WINDOW_PADDING);
        ui.heading(DIALOG_TITLE);
        ui.add_space(8.0);

        egui::Grid::new("text_settings_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Enter a text: ");
                ui.text_edit_singleline(&mut form.text);
                ui.end_row();

                ui.label("Choose a color: ");
                option_combo(ui, "text_color", &mut form.color, TextColor::ALL);
                ui.end_row();

                ui.label("Select a font size: ");
                option_combo(ui, "font_size", &mut form.font_size, &font_sizes);
                ui.end_row();

                ui.label("Select a font: ");
                option_combo(ui, "font_family", &mut form.font_family, FontFamily::ALL);
                ui.end_row();
            });

        ui.add_space(16.0);
        let mut action = DialogAction::None;
        ui.horizontal(|ui| {
            if ui.button("Apply changes").clicked() {
                action = DialogAction::Apply;
            }
            if ui.button("Cancel").clicked() {
                action = DialogAction::Close;
            }
        });
        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            action = DialogAction::Close;
        }
        action
    });

    match response.inner {
        DialogAction::None => {}
        DialogAction::Close => app.session.close_dialog(),
        DialogAction::Apply => {
            if let Some(ConfirmOutcome::Missing(_)) = app.session.confirm_dialog() {
                app.dialogs.show_info(MISSING_VALUES_TITLE, MISSING_VALUES_MESSAGE);
            }
        }
    }
}
