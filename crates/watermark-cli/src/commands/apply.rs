use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use watermark_core::config::WatermarkConfig;
use watermark_core::dialog::TextSettingsForm;
use watermark_core::io::image_io::save_image;
use watermark_core::palette::{FontFamily, TextColor};
use watermark_core::render::composite;
use watermark_core::watermark::WatermarkSpec;

use crate::summary::print_apply_summary;

#[derive(Args)]
pub struct ApplyArgs {
    /// Input image
    pub input: PathBuf,

    /// Watermark text (omit to save the fitted image without overlay)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Color name: Red, Blue, Yellow, Black or White
    #[arg(long)]
    pub color: Option<TextColor>,

    /// Font size (30-80)
    #[arg(long)]
    pub size: Option<u32>,

    /// Font family, e.g. "Times New Roman"
    #[arg(long)]
    pub font: Option<FontFamily>,

    /// Output file path
    #[arg(short, long, default_value = "watermarked.png")]
    pub output: PathBuf,
}

impl ApplyArgs {
    /// Validate the overlay options with the same rules as the settings dialog.
    fn to_spec(&self) -> Result<Option<WatermarkSpec>> {
        let Some(ref text) = self.text else {
            return Ok(None);
        };
        let form = TextSettingsForm {
            text: text.clone(),
            color: self.color,
            font_size: self.size,
            font_family: self.font,
        };
        match form.to_spec() {
            Ok(spec) => Ok(Some(spec)),
            Err(missing) => {
                let names: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
                bail!(
                    "Please do not leave blank spaces. Missing or invalid: {}",
                    names.join(", ")
                )
            }
        }
    }
}

pub fn run(args: &ApplyArgs, config: &WatermarkConfig) -> Result<()> {
    let spec = args.to_spec()?;
    print_apply_summary(&args.input, &args.output, spec.as_ref(), config);

    let img = composite(&args.input, spec.as_ref(), config)
        .with_context(|| format!("Failed to watermark {}", args.input.display()))?;
    save_image(&img, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("Saved to {}", args.output.display());
    Ok(())
}
