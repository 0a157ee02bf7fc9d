use std::path::Path;

use anyhow::Context as _;
use image::RgbImage;

use crate::foundation::error::{ZoomError, ZoomResult};

/// Open and decode the source image at `path`, normalized to 8-bit RGB.
///
/// The format is detected from the file contents; the extension is only a fallback hint.
/// Alpha and palette information are dropped.
#[tracing::instrument]
pub fn resolve(path: &Path) -> ZoomResult<RgbImage> {
    let meta = match std::fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ZoomError::not_found(path));
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("inspect input '{}'", path.display()))
                .into());
        }
    };
    if !meta.is_file() {
        return Err(ZoomError::invalid_input(path));
    }

    tracing::debug!("opening image: {}", path.display());
    let reader = image::ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .with_context(|| format!("error opening image file '{}'", path.display()))?;

    let decoded = match reader.decode() {
        Ok(img) => img,
        Err(image::ImageError::IoError(e)) if !is_truncation(&e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("error reading image file '{}'", path.display()))
                .into());
        }
        Err(e) => return Err(ZoomError::unreadable_image(path, e)),
    };

    if decoded.width() == 0 || decoded.height() == 0 {
        let limit =
            image::error::LimitError::from_kind(image::error::LimitErrorKind::DimensionError);
        return Err(ZoomError::unreadable_image(path, image::ImageError::Limits(limit)));
    }

    tracing::debug!(
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "decoded source image"
    );
    Ok(decoded.into_rgb8())
}

// Decoders surface short or garbled streams as I/O errors.
fn is_truncation(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::UnexpectedEof | std::io::ErrorKind::InvalidData
    )
}

#[cfg(test)]
#[path = "../tests/unit/input.rs"]
mod tests;
