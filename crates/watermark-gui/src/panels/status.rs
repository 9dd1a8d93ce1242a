use watermark_core::session::{Screen, Session};

use crate::app::WatermarkApp;

const LOG_LINES: usize = 4;

pub fn show(ctx: &egui::Context, app: &mut WatermarkApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        log_area(ui, &app.ui_state.log_messages);

        ui.label(status_line(&app.session));

        ui.add_space(2.0);
    });
}

/// Most recent log lines in a scroll area sized for `LOG_LINES` rows, so the
/// panel keeps its height while the log is still empty.
fn log_area(ui: &mut egui::Ui, messages: &[String]) {
    let row = ui.text_style_height(&egui::TextStyle::Body) + ui.spacing().item_spacing.y;
    let height = row * LOG_LINES as f32;

    egui::ScrollArea::vertical()
        .id_salt("log")
        .auto_shrink([false, false])
        .max_height(height)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.set_min_height(height);
            for msg in messages {
                ui.label(msg);
            }
        });
}

/// "No image" on the landing screen, otherwise the file name and the current
/// watermark settings.
fn status_line(session: &Session) -> String {
    if session.screen() == Screen::Landing {
        return "No image".into();
    }
    let name = session
        .image_path()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match session.watermark() {
        Some(spec) => format!(
            "{name} | {} {}px {}",
            spec.font_family, spec.font_size, spec.color
        ),
        None => format!("{name} | No watermark"),
    }
}
