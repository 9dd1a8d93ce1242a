/// Canvas display state.
#[derive(Default)]
pub struct ViewportState {
    /// Loaded image fitted to the canvas; `None` on the landing screen.
    pub texture: Option<egui::TextureHandle>,
}

impl ViewportState {
    pub fn clear(&mut self) {
        self.texture = None;
    }
}
