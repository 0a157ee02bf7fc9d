use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{ZoomError, ZoomResult};
use crate::render::frame_file_name;

/// Sink contract for consuming rendered frames in sequence order.
///
/// Ordering contract: `push_frame` and `repeat_last` are called in strictly increasing
/// `FrameIndex` order, and `repeat_last` only after at least one `push_frame`.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, canvas: Canvas) -> ZoomResult<()>;
    /// Push one freshly rendered frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &RgbImage) -> ZoomResult<()>;
    /// Emit an exact copy of the most recently pushed frame under `idx`.
    fn repeat_last(&mut self, idx: FrameIndex) -> ZoomResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> ZoomResult<()>;
}

/// Writes each frame as `frame_NNNN.png` into a flat directory.
///
/// Repeated frames reuse the encoded bytes of the last pushed frame, so they are
/// byte-identical to it.
#[derive(Debug)]
pub struct DirSink {
    dir: PathBuf,
    last_png: Option<Vec<u8>>,
    written: u64,
}

impl DirSink {
    /// Prepare `dir` (see [`prepare_output_dir`]) and return a sink writing into it.
    pub fn create(dir: impl Into<PathBuf>) -> ZoomResult<Self> {
        let dir = dir.into();
        prepare_output_dir(&dir)?;
        Ok(Self {
            dir,
            last_png: None,
            written: 0,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of files written so far.
    pub fn frames_written(&self) -> u64 {
        self.written
    }

    fn write(&mut self, idx: FrameIndex, bytes: &[u8]) -> ZoomResult<()> {
        let path = self.dir.join(frame_file_name(idx));
        std::fs::write(&path, bytes).map_err(|e| ZoomError::write_failure(&path, e))?;
        self.written += 1;
        Ok(())
    }
}

impl FrameSink for DirSink {
    fn begin(&mut self, _canvas: Canvas) -> ZoomResult<()> {
        self.last_png = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &RgbImage) -> ZoomResult<()> {
        let bytes = encode_png(frame)
            .map_err(|e| ZoomError::write_failure(self.dir.join(frame_file_name(idx)), e))?;
        self.write(idx, &bytes)?;
        self.last_png = Some(bytes);
        Ok(())
    }

    fn repeat_last(&mut self, idx: FrameIndex) -> ZoomResult<()> {
        let Some(bytes) = self.last_png.take() else {
            let name = frame_file_name(idx);
            return Err(anyhow::anyhow!("no frame to repeat for {name}").into());
        };
        let res = self.write(idx, &bytes);
        self.last_png = Some(bytes);
        res
    }

    fn end(&mut self) -> ZoomResult<()> {
        tracing::debug!(
            written = self.written,
            dir = %self.dir.display(),
            "frame sequence complete"
        );
        Ok(())
    }
}

/// Create `dir` (and missing parents) and confirm new files can be created in it.
///
/// Every failure is reported as [`ZoomError::PermissionDenied`].
pub fn prepare_output_dir(dir: &Path) -> ZoomResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        ZoomError::permission_denied(dir, format!("error creating output directory: {e}"))
    })?;

    let meta = std::fs::metadata(dir).map_err(|e| {
        ZoomError::permission_denied(dir, format!("cannot inspect directory: {e}"))
    })?;
    if !meta.is_dir() {
        return Err(ZoomError::permission_denied(dir, "path is not a directory"));
    }
    if meta.permissions().readonly() {
        return Err(ZoomError::permission_denied(dir, "directory is read-only"));
    }

    let probe = dir.join(format!(".zoomframes_probe_{}", std::process::id()));
    std::fs::write(&probe, b"")
        .map_err(|e| ZoomError::permission_denied(dir, format!("cannot create files: {e}")))?;
    std::fs::remove_file(&probe)
        .map_err(|e| ZoomError::permission_denied(dir, format!("cannot remove files: {e}")))?;
    Ok(())
}

fn encode_png(frame: &RgbImage) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    frame
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(std::io::Error::other)?;
    Ok(buf)
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    canvas: Option<Canvas>,
    frames: Vec<(FrameIndex, RgbImage)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas captured in `begin`, if any.
    pub fn canvas(&self) -> Option<Canvas> {
        self.canvas
    }

    /// Frames in sequence order.
    pub fn frames(&self) -> &[(FrameIndex, RgbImage)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, canvas: Canvas) -> ZoomResult<()> {
        self.canvas = Some(canvas);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &RgbImage) -> ZoomResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn repeat_last(&mut self, idx: FrameIndex) -> ZoomResult<()> {
        let last = self
            .frames
            .last()
            .map(|(_, f)| f.clone())
            .ok_or_else(|| anyhow::anyhow!("no frame to repeat for {}", frame_file_name(idx)))?;
        self.frames.push((idx, last));
        Ok(())
    }

    fn end(&mut self) -> ZoomResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/sink.rs"]
mod tests;
