use thiserror::Error;

/// Failures at the spreadsheet I/O seam. Backend-specific errors are
/// flattened to text via [`IoError::from_backend`]; the core never recovers
/// from these, they abort the run.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("{backend}: {message}")]
    Backend { backend: String, message: String },

    #[error("unsupported feature `{feature}` ({context})")]
    Unsupported { feature: String, context: String },

    #[error("sheet not found: {0}")]
    SheetNotFound(String),

    #[error("invalid cell range `{0}`")]
    InvalidRange(String),
}

impl IoError {
    pub fn from_backend(backend: &str, err: impl std::fmt::Display) -> Self {
        IoError::Backend {
            backend: backend.to_string(),
            message: err.to_string(),
        }
    }
}
