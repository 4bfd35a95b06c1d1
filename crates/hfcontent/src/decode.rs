//! Image loading with the missing-file / unreadable-file split.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageReader};

use crate::error::ScoreError;

/// Open and decode an image file.
///
/// The format is sniffed from the file contents, falling back to the
/// extension. A path with nothing behind it yields [`ScoreError::NotFound`];
/// every other I/O or codec failure yields [`ScoreError::Decode`].
pub fn load_image(path: &Path) -> Result<DynamicImage, ScoreError> {
    let reader = ImageReader::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ScoreError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ScoreError::Decode {
            message: format!("{}: {}", path.display(), e),
        },
    })?;
    let reader = reader.with_guessed_format().map_err(|e| ScoreError::Decode {
        message: format!("{}: {}", path.display(), e),
    })?;
    let image = reader.decode()?;
    tracing::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

/// Decode an encoded image held in memory.
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage, ScoreError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ScoreError::Decode {
            message: e.to_string(),
        })?;
    Ok(reader.decode()?)
}
