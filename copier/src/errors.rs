/// Unified error types for urlcat.
use thiserror::Error;

/// Errors raised while copying one source into the sink.
///
/// Both variants propagate unchanged to the driver; there is no retry and
/// no partial-success reporting.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
