use std::collections::HashSet;

use watermark_core::config::WatermarkConfig;
use watermark_core::palette::FontFamily;
use watermark_core::render::font::find_font_file;

/// Font families the preview can draw in their configured file.
///
/// Families without a readable file use egui's proportional font, which is
/// the same bundled font the saved image falls back to.
#[derive(Default)]
pub struct PreviewFonts {
    registered: HashSet<FontFamily>,
}

impl PreviewFonts {
    /// Register every family's font file with `ctx`.
    pub fn install(ctx: &egui::Context, config: &WatermarkConfig) -> Self {
        let mut defs = egui::FontDefinitions::default();
        let fallback = defs
            .families
            .get(&egui::FontFamily::Proportional)
            .cloned()
            .unwrap_or_default();

        let mut registered = HashSet::new();
        for &family in FontFamily::ALL {
            let Some((path, bytes)) = find_font_file(config, family) else {
                continue;
            };
            // Keyed by path so families sharing a file load it once.
            let key = path.display().to_string();
            defs.font_data
                .entry(key.clone())
                .or_insert_with(|| egui::FontData::from_owned(bytes).into());

            let mut chain = vec![key];
            chain.extend(fallback.iter().cloned());
            defs.families.insert(egui::FontFamily::Name(family.name().into()), chain);
            tracing::debug!(family = %family, path = %path.display(), "Preview font registered");
            registered.insert(family);
        }

        ctx.set_fonts(defs);
        Self { registered }
    }

    pub fn font_id(&self, family: FontFamily, size: f32) -> egui::FontId {
        if self.registered.contains(&family) {
            egui::FontId::new(size, egui::FontFamily::Name(family.name().into()))
        } else {
            egui::FontId::proportional(size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_family_is_proportional() {
        let fonts = PreviewFonts::default();
        assert_eq!(fonts.font_id(FontFamily::Impact, 40.0), egui::FontId::proportional(40.0));
    }

    #[test]
    fn mapped_family_gets_named_font() {
        let dir = tempfile::tempdir().unwrap();
        let hack = dir.path().join("hack.ttf");
        std::fs::write(&hack, epaint_default_fonts::HACK_REGULAR).unwrap();
        let mut config = WatermarkConfig {
            font_path: dir.path().join("missing.ttf"),
            ..Default::default()
        };
        config.font_families.insert("Impact".into(), hack);

        let fonts = PreviewFonts::install(&egui::Context::default(), &config);
        assert_eq!(
            fonts.font_id(FontFamily::Impact, 40.0),
            egui::FontId::new(40.0, egui::FontFamily::Name("Impact".into()))
        );
        assert_eq!(fonts.font_id(FontFamily::Arial, 40.0), egui::FontId::proportional(40.0));
    }
}
