//! Turn a still image into a numbered zoom-in frame sequence.
//!
//! The pipeline is linear and single-threaded:
//!
//! - [`input::resolve`] decodes the source to RGB8
//! - [`fit::fit_canvas`] scales and center-crops it to the [`Canvas`]
//! - [`render::render_frames`] emits the zoom phase and the hold phase into a [`FrameSink`]
//!
//! [`generate_zoom_frames`] wires the three together and writes PNG files through a [`DirSink`].
#![forbid(unsafe_code)]

mod foundation;

pub mod config;
pub mod fit;
pub mod input;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod sink;

pub use crate::config::{LogConfig, ZoomConfig};
pub use crate::foundation::core::{Canvas, CropRect, FrameIndex};
pub use crate::foundation::error::{ErrorKind, ZoomError, ZoomResult};
pub use crate::pipeline::{RunSummary, generate_zoom_frames};
pub use crate::render::{RenderStats, frame_file_name};
pub use crate::sink::{DirSink, FrameSink, InMemorySink};
