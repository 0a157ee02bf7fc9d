use tracing_subscriber::fmt::MakeWriter;

use crate::config::LogConfig;

/// Plain `LEVEL message` lines on stderr, filtered at `cfg.level`.
pub fn subscriber(cfg: &LogConfig) -> impl tracing::Subscriber + Send + Sync + 'static {
    subscriber_with_writer(cfg, std::io::stderr)
}

pub fn subscriber_with_writer<W>(
    cfg: &LogConfig,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(cfg.level)
        .with_writer(writer)
        .with_target(false)
        .without_time()
        .with_ansi(false)
        .finish()
}

/// Run `f` with diagnostics routed through a subscriber built from `cfg`.
///
/// The subscriber is scoped to this call; no process-wide default is installed.
pub fn with_logging<T>(cfg: &LogConfig, f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(subscriber(cfg), f)
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
