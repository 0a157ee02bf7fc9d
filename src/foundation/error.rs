use std::path::{Path, PathBuf};

pub type ZoomResult<T> = Result<T, ZoomError>;

/// Discriminant of [`ZoomError`], for callers that dispatch on the failure category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    UnreadableImage,
    PermissionDenied,
    WriteFailure,
    InvalidConfig,
    Unexpected,
}

#[derive(thiserror::Error, Debug)]
pub enum ZoomError {
    #[error("input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("input path is a directory, not a file: {}", .path.display())]
    InvalidInput { path: PathBuf },

    #[error(
        "cannot identify image file: {}: it may be corrupt or an unsupported format ({source})",
        .path.display()
    )]
    UnreadableImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("output directory is not writable: {}: {reason}", .path.display())]
    PermissionDenied { path: PathBuf, reason: String },

    #[error("error saving frame {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unexpected error: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl ZoomError {
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn invalid_input(path: impl AsRef<Path>) -> Self {
        Self::InvalidInput {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn unreadable_image(path: impl AsRef<Path>, source: image::ImageError) -> Self {
        Self::UnreadableImage {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn permission_denied(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::PermissionDenied {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    pub fn write_failure(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::UnreadableImage { .. } => ErrorKind::UnreadableImage,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::WriteFailure { .. } => ErrorKind::WriteFailure,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
            Self::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
