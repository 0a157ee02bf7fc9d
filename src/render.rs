use image::RgbImage;

use crate::config::ZoomConfig;
use crate::fit::RESAMPLE_FILTER;
use crate::foundation::core::{Canvas, CropRect, FrameIndex};
use crate::foundation::error::{ZoomError, ZoomResult};
use crate::sink::FrameSink;

/// File extension of every written frame.
pub const FRAME_EXTENSION: &str = "png";

/// `frame_NNNN.png`, index zero-padded to four digits.
pub fn frame_file_name(idx: FrameIndex) -> String {
    format!("frame_{:04}.{FRAME_EXTENSION}", idx.0)
}

/// Magnification of zoom frame `i`.
pub fn zoom_factor(increment: f64, i: u32) -> f64 {
    1.0 + increment * f64::from(i)
}

/// Centered crop of `canvas` at `zoom`, sizes floored and never below 1x1.
pub fn zoom_crop(canvas: Canvas, zoom: f64) -> CropRect {
    let width = ((f64::from(canvas.width) / zoom).floor() as u32).max(1);
    let height = ((f64::from(canvas.height) / zoom).floor() as u32).max(1);
    CropRect::centered(canvas, width, height)
}

/// Crop `fitted` at `zoom` and scale the crop back up to `canvas`.
pub fn zoom_frame(fitted: &RgbImage, canvas: Canvas, zoom: f64) -> RgbImage {
    let rect = zoom_crop(canvas, zoom);
    if rect.is_full(canvas) {
        return fitted.clone();
    }
    let crop =
        image::imageops::crop_imm(fitted, rect.x, rect.y, rect.width, rect.height).to_image();
    image::imageops::resize(&crop, canvas.width, canvas.height, RESAMPLE_FILTER)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub zoom_frames: u64,
    pub hold_frames: u64,
}

impl RenderStats {
    pub fn total(self) -> u64 {
        self.zoom_frames + self.hold_frames
    }
}

/// Render the zoom phase followed by the hold phase into `sink`.
///
/// Zoom frame `i` uses magnification `1 + zoom_increment * i`; the hold phase then repeats the
/// last zoom frame [`ZoomConfig::hold_frames`] times. The first error aborts the render and
/// frames already emitted are left in place.
#[tracing::instrument(skip(fitted, cfg, sink), fields(total_frames = cfg.total_frames))]
pub fn render_frames(
    fitted: &RgbImage,
    cfg: &ZoomConfig,
    sink: &mut dyn FrameSink,
) -> ZoomResult<RenderStats> {
    cfg.validate()?;
    if fitted.dimensions() != cfg.canvas.dimensions() {
        return Err(ZoomError::invalid_config(format!(
            "fitted canvas is {}x{} but the configured canvas is {}x{}",
            fitted.width(),
            fitted.height(),
            cfg.canvas.width,
            cfg.canvas.height
        )));
    }

    sink.begin(cfg.canvas)?;

    let mut stats = RenderStats::default();
    for i in 0..cfg.total_frames {
        let zoom = zoom_factor(cfg.zoom_increment, i);
        let frame = zoom_frame(fitted, cfg.canvas, zoom);
        sink.push_frame(FrameIndex(u64::from(i)), &frame)?;
        stats.zoom_frames += 1;
    }

    let hold = cfg.hold_frames();
    if hold > 0 {
        tracing::debug!("adding {hold} static hold frames");
    }
    let first_hold = FrameIndex(u64::from(cfg.total_frames));
    for j in 0..hold {
        sink.repeat_last(first_hold.offset(j))?;
        stats.hold_frames += 1;
    }

    sink.end()?;
    Ok(stats)
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;
