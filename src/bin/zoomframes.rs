use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use zoomframes::{LogConfig, ZoomConfig};

/// Generate a sequence of zoom-in frames from a source image.
#[derive(Parser, Debug)]
#[command(name = "zoomframes", version)]
struct Cli {
    /// Path to the input image file.
    #[arg(long = "input-frame", visible_alias = "input_frame")]
    input_frame: PathBuf,

    /// Directory to save output frames into (created if missing).
    #[arg(long = "output-frames-dir", visible_alias = "output_frames_dir")]
    output_frames_dir: PathBuf,

    /// Print debug diagnostics on stderr.
    #[arg(long, hide = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log = if cli.verbose {
        LogConfig::verbose()
    } else {
        LogConfig::default()
    };
    zoomframes::logging::with_logging(&log, || run(&cli))
}

fn run(cli: &Cli) -> ExitCode {
    let cfg = ZoomConfig::default();
    let summary =
        match zoomframes::generate_zoom_frames(&cli.input_frame, &cli.output_frames_dir, &cfg) {
            Ok(summary) => summary,
            Err(err) => {
                tracing::error!("{err}");
                return ExitCode::FAILURE;
            }
        };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("unexpected error: encode run summary: {err}");
            ExitCode::FAILURE
        }
    }
}
