use std::sync::mpsc;

use watermark_core::config::WatermarkConfig;
use watermark_core::session::{Screen, Session};
use watermark_core::watermark::WatermarkSpec;

use crate::convert::rgba_to_color_image;
use crate::dialogs::RfdDialogs;
use crate::fonts::PreviewFonts;
use crate::panels;
use crate::states::{UIState, ViewportState};

pub struct WatermarkApp {
    pub session: Session,
    /// Cloned into each text settings dialog callback.
    pub spec_tx: mpsc::Sender<WatermarkSpec>,
    pub spec_rx: mpsc::Receiver<WatermarkSpec>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub dialogs: RfdDialogs,
    pub fonts: PreviewFonts,
}

impl WatermarkApp {
    pub fn new(ctx: &egui::Context, config: WatermarkConfig) -> Self {
        let (spec_tx, spec_rx) = mpsc::channel();
        ctx.style_mut(|style| style.visuals.panel_fill = crate::theme::BACKGROUND);
        let fonts = PreviewFonts::install(ctx, &config);

        Self {
            session: Session::new(config),
            spec_tx,
            spec_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            dialogs: RfdDialogs,
            fonts,
        }
    }

    /// Apply every spec confirmed since the last frame.
    fn poll_specs(&mut self) {
        while let Ok(spec) = self.spec_rx.try_recv() {
            self.ui_state.add_log(format!(
                "Watermark: \"{}\" {} {}px {}",
                spec.text, spec.color, spec.font_size, spec.font_family
            ));
            self.session.apply_watermark(spec);
        }
    }

    pub fn select_file(&mut self, ctx: &egui::Context) {
        match self.session.select_file(&mut self.dialogs) {
            Ok(true) => {
                self.update_canvas_texture(ctx);
                if let Some(path) = self.session.image_path() {
                    self.ui_state.add_log(format!("Opened: {}", path.display()));
                }
            }
            Ok(false) => {}
            Err(e) => self.report_error("Could not open image", &e.to_string()),
        }
    }

    pub fn open_text_dialog(&mut self, ctx: &egui::Context) {
        let tx = self.spec_tx.clone();
        let ctx = ctx.clone();
        self.session.open_text_dialog(move |spec| {
            let _ = tx.send(spec);
            ctx.request_repaint();
        });
    }

    pub fn save(&mut self) {
        match self.session.save(&mut self.dialogs) {
            Ok(Some(path)) => self.ui_state.add_log(format!("Saved: {}", path.display())),
            Ok(None) => {}
            Err(e) => self.report_error("Could not save image", &e.to_string()),
        }
    }

    pub fn return_to_main(&mut self) {
        self.session.return_to_main();
        self.viewport.clear();
        self.ui_state.add_log("Returned to start".into());
    }

    fn update_canvas_texture(&mut self, ctx: &egui::Context) {
        self.viewport.texture = self.session.preview().map(|preview| {
            ctx.load_texture("canvas", rgba_to_color_image(preview), egui::TextureOptions::LINEAR)
        });
    }

    fn report_error(&mut self, title: &str, message: &str) {
        tracing::error!("{title}: {message}");
        self.ui_state.add_log(format!("ERROR: {message}"));
        self.dialogs.show_error(title, message);
    }
}

impl eframe::App for WatermarkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_specs();

        panels::status::show(ctx, self);
        match self.session.screen() {
            Screen::Landing => panels::landing::show(ctx, self),
            Screen::Editing => panels::editing::show(ctx, self),
        }
        panels::text_settings::show(ctx, self);
    }
}
