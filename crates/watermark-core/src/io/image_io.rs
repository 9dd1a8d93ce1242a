use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};
use tracing::{debug, info};

use crate::error::Result;

/// Open an image and resize it to exactly `size`x`size` pixels.
///
/// The aspect ratio is not preserved: the image is stretched to fill the
/// square canvas.
pub fn load_fitted(path: &Path, size: u32) -> Result<RgbaImage> {
    let img = image::open(path)?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Loaded image"
    );
    Ok(img.resize_exact(size, size, FilterType::Lanczos3).to_rgba8())
}

/// Save an image, choosing the format from the file extension.
///
/// Paths without a recognised extension are written as PNG. Formats without
/// an alpha channel get the RGB part only.
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    match format {
        ImageFormat::Jpeg | ImageFormat::Pnm => {
            DynamicImage::ImageRgba8(img.clone())
                .to_rgb8()
                .save_with_format(path, format)?;
        }
        _ => img.save_with_format(path, format)?,
    }
    info!(path = %path.display(), "Saved image");
    Ok(())
}
