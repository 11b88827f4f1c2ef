use thiserror::Error;

/// Errors returned by the `Result`-based guard surface
#[derive(Debug, Error)]
pub enum GuardError {
    /// Buffer is not structurally valid UTF-8
    #[error("byte buffer is not well-formed UTF-8")]
    Malformed,
    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Input exceeds the configured size limit
    #[error("input of {size} bytes exceeds limit of {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },
}

/// Result type for guard operations
pub type GuardResult<T> = Result<T, GuardError>;
