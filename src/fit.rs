use image::{RgbImage, imageops::FilterType};

use crate::foundation::core::Canvas;

/// Resampling filter used for every resize in the pipeline.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Above this many pixels the intermediate "resize then crop" buffer is not materialized;
/// only the source window that lands on the canvas gets resized.
pub const MAX_FIT_PIXELS: u64 = 1 << 26;

// Lanczos3 reads three source pixels past each edge of the sampled window.
const WINDOW_PAD: i64 = 3;

/// Resized dimensions that cover `canvas` while preserving the source aspect ratio.
///
/// The scaled axis is truncated, then clamped so it never falls short of the canvas.
pub fn fill_dimensions(src_width: u32, src_height: u32, canvas: Canvas) -> (u32, u32) {
    let src_ratio = f64::from(src_width) / f64::from(src_height);
    if src_ratio > canvas.aspect_ratio() {
        let width = (src_ratio * f64::from(canvas.height)) as u32;
        (width.max(canvas.width), canvas.height)
    } else {
        let height = (f64::from(canvas.width) / src_ratio) as u32;
        (canvas.width, height.max(canvas.height))
    }
}

/// Scale `source` to fill `canvas` and crop the centered `canvas`-sized region.
///
/// The result is always exactly `canvas.width x canvas.height`.
#[tracing::instrument(skip(source), fields(src = ?source.dimensions()))]
pub fn fit_canvas(source: &RgbImage, canvas: Canvas) -> RgbImage {
    let (src_w, src_h) = source.dimensions();
    let (resized_w, resized_h) = fill_dimensions(src_w, src_h, canvas);

    if u64::from(resized_w) * u64::from(resized_h) <= MAX_FIT_PIXELS {
        let resized = image::imageops::resize(source, resized_w, resized_h, RESAMPLE_FILTER);
        let left = (resized_w - canvas.width) / 2;
        let top = (resized_h - canvas.height) / 2;
        return image::imageops::crop_imm(&resized, left, top, canvas.width, canvas.height)
            .to_image();
    }

    tracing::debug!(resized_w, resized_h, "fitting through a source window");
    let x = window(src_w, resized_w, canvas.width);
    let y = window(src_h, resized_h, canvas.height);
    let sub = image::imageops::crop_imm(source, x.src_start, y.src_start, x.src_len, y.src_len)
        .to_image();
    let resized = image::imageops::resize(&sub, x.resized_len, y.resized_len, RESAMPLE_FILTER);
    image::imageops::crop_imm(&resized, x.offset, y.offset, canvas.width, canvas.height)
        .to_image()
}

/// One axis of a source window mapped into resized space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Window {
    src_start: u32,
    src_len: u32,
    resized_len: u32,
    offset: u32,
}

fn window(src: u32, resized: u32, canvas: u32) -> Window {
    let scale = f64::from(resized) / f64::from(src);
    let left = (resized - canvas) / 2;

    let start = ((f64::from(left) / scale).floor() as i64 - WINDOW_PAD).max(0);
    let end =
        ((f64::from(left + canvas) / scale).ceil() as i64 + WINDOW_PAD).min(i64::from(src));
    let src_start = start as u32;
    let src_len = (end - start).max(1) as u32;

    let resized_len = ((f64::from(src_len) * scale).round() as u32).max(canvas);
    let mapped_start = (f64::from(src_start) * scale).round() as u32;
    let offset = left.saturating_sub(mapped_start).min(resized_len - canvas);

    Window {
        src_start,
        src_len,
        resized_len,
        offset,
    }
}

#[cfg(test)]
#[path = "../tests/unit/fit.rs"]
mod tests;
