use crate::app::WatermarkApp;
use crate::panels::{canvas, helpers};

pub fn show(ctx: &egui::Context, app: &mut WatermarkApp) {
    egui::CentralPanel::default()
        .frame(helpers::window_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let rect = canvas::allocate(ui);
                canvas::paint_title(ui.painter(), rect);
                canvas::paint_logo(ui.painter(), rect);

                ui.add_space(15.0);
                if helpers::action_button(ui, "Select File") {
                    app.select_file(ctx);
                }

                ui.add_space(25.0);
                ui.label(
                    egui::RichText::new(format!(
                        "Image Watermarking App v{}",
                        env!("CARGO_PKG_VERSION")
                    ))
                    .size(20.0)
                    .strong()
                    .color(egui::Color32::WHITE),
                );
            });
        });
}
