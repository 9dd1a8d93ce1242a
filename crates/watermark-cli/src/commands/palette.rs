use anyhow::Result;
use console::Style;
use watermark_core::consts::FONT_SIZE_RANGE;
use watermark_core::palette::{FontFamily, TextColor};

pub fn run() -> Result<()> {
    let header = Style::new().cyan().bold();
    let label = Style::new().dim();
    let value = Style::new().bold().white();

    println!("{}", header.apply_to("Colors"));
    for color in TextColor::ALL {
        println!("  {:<10}{}", label.apply_to(color), value.apply_to(color.hex()));
    }

    println!();
    println!("{}", header.apply_to("Font sizes"));
    println!(
        "  {}",
        value.apply_to(format!("{}-{}", FONT_SIZE_RANGE.start(), FONT_SIZE_RANGE.end()))
    );

    println!();
    println!("{}", header.apply_to("Font families"));
    for family in FontFamily::ALL {
        println!("  {}", value.apply_to(family));
    }

    Ok(())
}
