use crate::app::WatermarkApp;
use crate::panels::{canvas, helpers};

pub fn show(ctx: &egui::Context, app: &mut WatermarkApp) {
    egui::CentralPanel::default()
        .frame(helpers::window_frame())
        .show(ctx, |ui| {
            let mut return_clicked = false;

            ui.horizontal_top(|ui| {
                let rect = canvas::allocate(ui);
                if let Some(ref texture) = app.viewport.texture {
                    canvas::paint_image(ui.painter(), rect, texture);
                }
                canvas::paint_overlay(ui.painter(), rect, &app.session, &app.fonts);

                ui.add_space(15.0);
                return_clicked = helpers::action_button(ui, "Return");
            });

            ui.add_space(15.0);
            ui.horizontal(|ui| {
                if helpers::action_button(ui, "Insert a text") {
                    app.open_text_dialog(ctx);
                }
                ui.add_space(15.0);
                if helpers::action_button(ui, "Save Image") {
                    app.save();
                }
            });

            if return_clicked {
                app.return_to_main();
            }
        });
}
