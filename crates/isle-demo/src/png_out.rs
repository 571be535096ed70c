//! PNG encoding of debug images.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use isle_terrain::debug_viz::{DebugImage, DebugImageError};

/// Errors from writing a debug image to disk.
#[derive(Debug, thiserror::Error)]
pub enum PngWriteError {
    /// The output file could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The image could not be rendered at the requested scale.
    #[error("failed to render image: {0}")]
    Render(#[from] DebugImageError),

    /// The PNG encoder rejected the image or the write failed.
    #[error("failed to encode png: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Write `image` as an 8-bit RGBA PNG at `path`.
pub fn write_png(path: &Path, image: &DebugImage) -> Result<(), PngWriteError> {
    let file = File::create(path).map_err(|source| PngWriteError::Create {
        path: path.display().to_string(),
        source,
    })?;

    let mut encoder = png::Encoder::new(BufWriter::new(file), image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.pixels)?;
    writer.finish()?;
    Ok(())
}
