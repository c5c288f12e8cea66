use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// Writes `image` as PNG, replacing any file already at `path`.
/// The parent directory must already exist.
pub fn write_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
