use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::io::ErrorKind;
use std::path::Path;

use super::grid::Cell;

/// Decoded sprite sheet, read-only once loaded.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    image: DynamicImage,
}

impl SpriteSheet {
    pub fn from_image(image: DynamicImage) -> Self {
        Self { image }
    }

    /// Decodes the sheet at `path`, detecting the format from the file's
    /// contents. Returns `Ok(None)` when the file does not exist.
    pub fn open(path: &Path) -> Result<Option<Self>> {
        let reader = match ImageReader::open(path) {
            Ok(reader) => reader,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to open sprite sheet {}", path.display()));
            }
        };

        let image = reader
            .with_guessed_format()
            .with_context(|| format!("Failed to read sprite sheet {}", path.display()))?
            .decode()
            .with_context(|| format!("Failed to decode sprite sheet {}", path.display()))?;
        Ok(Some(Self::from_image(image)))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Copies the `size` x `size` region whose top-left corner is `cell`.
    /// The caller checks bounds first.
    pub fn crop(&self, cell: &Cell, size: u32) -> Result<DynamicImage> {
        let x = u32::try_from(cell.x).context("Cell x offset exceeds image coordinates")?;
        let y = u32::try_from(cell.y).context("Cell y offset exceeds image coordinates")?;
        Ok(self.image.crop_imm(x, y, size, size))
    }
}
