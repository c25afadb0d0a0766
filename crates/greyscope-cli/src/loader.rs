//! Filesystem adapter for loading a single image.

use std::path::Path;

use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::debug;

/// A decoded image plus the format the decoder detected.
pub struct LoadedImage {
    /// Decoded pixel data.
    pub image: DynamicImage,
    /// Format sniffed from the file content.
    pub format: ImageFormat,
}

impl LoadedImage {
    /// Short lowercase name of the detected format, e.g. `png`.
    #[must_use]
    pub fn format_name(&self) -> &'static str {
        self.format
            .extensions_str()
            .first()
            .copied()
            .unwrap_or("unknown")
    }
}

/// Decodes the image at `path`, sniffing the format from the content.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, its format is not
/// recognized, or decoding fails.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let reader = ImageReader::open(path)
        .with_context(|| format!("failed to open image: {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("failed to read image: {}", path.display()))?;

    let format = reader
        .format()
        .with_context(|| format!("unrecognized image format: {}", path.display()))?;

    let image = reader
        .decode()
        .with_context(|| format!("failed to decode image: {}", path.display()))?;

    debug!("decoded {} as {:?}", path.display(), format);

    Ok(LoadedImage { image, format })
}
