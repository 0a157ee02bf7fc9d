use std::path::{Path, PathBuf};

use crate::config::ZoomConfig;
use crate::fit::fit_canvas;
use crate::foundation::error::ZoomResult;
use crate::input::resolve;
use crate::render::render_frames;
use crate::sink::DirSink;

/// Result of a successful run, printed by the CLI.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// Resolved output directory.
    pub frames_path: PathBuf,
    /// Resolved source image.
    pub input_image_path: PathBuf,
    #[serde(skip)]
    pub frames_written: u64,
}

/// Resolve `input`, fit it to the canvas and write the zoom + hold sequence into `output_dir`.
///
/// The output directory is created and checked for writability before any pixel work starts.
#[tracing::instrument(skip(cfg))]
pub fn generate_zoom_frames(
    input: &Path,
    output_dir: &Path,
    cfg: &ZoomConfig,
) -> ZoomResult<RunSummary> {
    cfg.validate()?;

    let source = resolve(input)?;
    let mut sink = DirSink::create(output_dir)?;

    tracing::debug!(
        "generating {} frames into '{}'",
        cfg.output_frames(),
        output_dir.display()
    );
    let fitted = fit_canvas(&source, cfg.canvas);
    drop(source);

    let stats = render_frames(&fitted, cfg, &mut sink)?;

    Ok(RunSummary {
        frames_path: resolved(output_dir),
        input_image_path: resolved(input),
        frames_written: stats.total(),
    })
}

fn resolved(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
