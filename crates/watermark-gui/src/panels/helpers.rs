/// Show a ComboBox over `options` that may still be unselected.
/// Returns `true` if the value changed.
pub(crate) fn option_combo<T: PartialEq + Copy + ToString>(
    ui: &mut egui::Ui,
    id_salt: &str,
    current: &mut Option<T>,
    options: &[T],
) -> bool {
    let resp = egui::ComboBox::from_id_salt(id_salt)
        .selected_text(current.map(|c| c.to_string()).unwrap_or_default())
        .show_ui(ui, |ui| {
            let mut changed = false;
            for &choice in options {
                if ui
                    .selectable_value(current, Some(choice), choice.to_string())
                    .changed()
                {
                    changed = true;
                }
            }
            changed
        });
    resp.inner == Some(true)
}

/// A fixed-width push button.
pub(crate) fn action_button(ui: &mut egui::Ui, label: &str) -> bool {
    ui.add_sized([crate::theme::BUTTON_WIDTH, 24.0], egui::Button::new(label))
        .clicked()
}

pub(crate) fn window_frame() -> egui::Frame {
    egui::Frame::NONE
        .fill(crate::theme::BACKGROUND)
        .inner_margin(crate::theme::WINDOW_PADDING)
}
