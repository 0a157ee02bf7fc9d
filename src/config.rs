use crate::foundation::core::Canvas;
use crate::foundation::error::{ZoomError, ZoomResult};

/// Zoom frame sequence parameters.
///
/// Defaults produce 150 zoom frames at +0.001 magnification per frame on a 1080x1920 canvas,
/// followed by `150 + 60` hold frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Number of zoom-phase frames.
    pub total_frames: u32,
    /// Magnification added per zoom frame.
    pub zoom_increment: f64,
    /// Output frame dimensions.
    pub canvas: Canvas,
    /// Hold-phase frames written on top of `total_frames`.
    pub hold_extra_frames: u32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            total_frames: 150,
            zoom_increment: 0.001,
            canvas: Canvas::PORTRAIT_HD,
            hold_extra_frames: 60,
        }
    }
}

impl ZoomConfig {
    pub fn validate(&self) -> ZoomResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        if !self.zoom_increment.is_finite() || self.zoom_increment <= 0.0 {
            return Err(ZoomError::invalid_config(format!(
                "zoom_increment must be finite and > 0 (got {})",
                self.zoom_increment
            )));
        }

        let max_zoom = self.max_zoom();
        let min_side = f64::from(self.canvas.width.min(self.canvas.height));
        if !max_zoom.is_finite() || (min_side / max_zoom).floor() < 1.0 {
            return Err(ZoomError::invalid_config(format!(
                "zoom reaches {max_zoom} which crops the {}x{} canvas below 1x1",
                self.canvas.width, self.canvas.height
            )));
        }
        Ok(())
    }

    /// Number of hold-phase frames. Intentionally `total_frames + hold_extra_frames`.
    pub fn hold_frames(&self) -> u64 {
        if self.total_frames == 0 {
            return 0;
        }
        u64::from(self.total_frames) + u64::from(self.hold_extra_frames)
    }

    /// Number of files a full run writes.
    pub fn output_frames(&self) -> u64 {
        u64::from(self.total_frames) + self.hold_frames()
    }

    /// Magnification of the last zoom-phase frame.
    pub fn max_zoom(&self) -> f64 {
        let last = self.total_frames.saturating_sub(1);
        1.0 + self.zoom_increment * f64::from(last)
    }
}

/// Diagnostic output settings passed to the binary's subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogConfig {
    /// Minimum severity that reaches the sink.
    pub level: tracing::Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::WARN,
        }
    }
}

impl LogConfig {
    pub fn verbose() -> Self {
        Self {
            level: tracing::Level::DEBUG,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
