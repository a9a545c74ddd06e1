use std::path::PathBuf;
use thiserror::Error;

/// Every outcome of a snip that is not recognized text.
#[derive(Debug, Error)]
pub enum SnipError {
    /// The user aborted the selection or drew an empty rectangle.
    #[error("Selection cancelled")]
    SelectionCancelled,

    #[error("Screen capture failed: {0}")]
    CaptureFailure(String),

    /// No tessdata directory could be found before recognition started.
    #[error("No tessdata directory could be located")]
    MissingDataDirectory,

    /// The directory was resolved but disappeared before the backend ran.
    #[error("tessdata directory not found: {}", .0.display())]
    DataDirectoryMissing(PathBuf),

    #[error("Text recognition failed: {0}")]
    RecognitionFailure(String),

    #[error("Failed to encode image: {0}")]
    ImageEncoding(String),

    #[error("Overlay surface error: {0}")]
    Surface(String),

    #[error("A recognition is already in progress")]
    RecognitionInFlight,

    #[error("No display detected")]
    NoDisplay,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task execution error: {0}")]
    TaskJoin(String),
}

impl SnipError {
    /// Cancellation ends a snip normally; hosts usually show nothing for it.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, SnipError::SelectionCancelled)
    }
}

impl From<serde_json::Error> for SnipError {
    fn from(err: serde_json::Error) -> Self {
        SnipError::Config(err.to_string())
    }
}

impl From<tokio::task::JoinError> for SnipError {
    fn from(err: tokio::task::JoinError) -> Self {
        SnipError::TaskJoin(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SnipError>;
