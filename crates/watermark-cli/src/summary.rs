use std::path::Path;

use console::Style;
use watermark_core::config::WatermarkConfig;
use watermark_core::consts::{CANVAS_SIZE, OVERLAY_ANCHOR};
use watermark_core::watermark::WatermarkSpec;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_apply_summary(
    input: &Path,
    output: &Path,
    spec: Option<&WatermarkSpec>,
    config: &WatermarkConfig,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Watermark"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(9)));
    println!();

    println!("  {:<10}{}", s.label.apply_to("Input"), s.path.apply_to(input.display()));
    println!("  {:<10}{}", s.label.apply_to("Output"), s.path.apply_to(output.display()));
    println!(
        "  {:<10}{}",
        s.label.apply_to("Canvas"),
        s.value.apply_to(format!("{CANVAS_SIZE}x{CANVAS_SIZE}"))
    );

    match spec {
        Some(spec) => {
            println!("  {:<10}{}", s.label.apply_to("Text"), s.value.apply_to(&spec.text));
            println!("  {:<10}{}", s.label.apply_to("Color"), s.value.apply_to(spec.color));
            println!(
                "  {:<10}{} ({})",
                s.label.apply_to("Font"),
                s.value.apply_to(spec.font_family),
                spec.font_size
            );
            let files: Vec<String> = config
                .font_candidates(spec.font_family)
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            println!(
                "  {:<10}{} {}",
                s.label.apply_to("Files"),
                s.path.apply_to(files.join(", ")),
                s.label.apply_to("(bundled font if none load)")
            );
            println!(
                "  {:<10}{}",
                s.label.apply_to("Anchor"),
                s.value.apply_to(format!("{}, {}", OVERLAY_ANCHOR.0, OVERLAY_ANCHOR.1))
            );
        }
        None => {
            println!("  {:<10}{}", s.label.apply_to("Text"), s.disabled.apply_to("none"));
        }
    }
    println!();
}
