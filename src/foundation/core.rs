use crate::foundation::error::{ZoomError, ZoomResult};

/// Absolute 0-based index into the output frame sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Index `n` frames after this one.
    pub fn offset(self, n: u64) -> Self {
        Self(self.0.saturating_add(n))
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Portrait 1080x1920.
    pub const PORTRAIT_HD: Canvas = Canvas {
        width: 1080,
        height: 1920,
    };

    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> ZoomResult<Self> {
        if width == 0 || height == 0 {
            return Err(ZoomError::invalid_config(format!(
                "canvas dimensions must be > 0 (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }

    /// Width divided by height.
    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    pub fn dimensions(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Axis-aligned pixel rectangle `[x, x + width) x [y, y + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Rectangle of `width x height` centered in `canvas`, offsets floored.
    ///
    /// Sizes larger than the canvas are clamped to it.
    pub fn centered(canvas: Canvas, width: u32, height: u32) -> Self {
        let width = width.min(canvas.width);
        let height = height.min(canvas.height);
        Self {
            x: (canvas.width - width) / 2,
            y: (canvas.height - height) / 2,
            width,
            height,
        }
    }

    /// Return `true` when the rectangle covers the whole canvas.
    pub fn is_full(self, canvas: Canvas) -> bool {
        self.x == 0 && self.y == 0 && self.width == canvas.width && self.height == canvas.height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
