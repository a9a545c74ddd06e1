use serde::{Deserialize, Serialize};

/// Text produced by a successful recognition run
///
/// An empty value means the backend ran fine and found nothing, which is
/// not the same as a `RecognitionFailure`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecognizedText {
    pub text: String,
}

impl RecognizedText {
    /// Build from raw backend output, trimming surrounding whitespace
    pub fn from_raw(raw: &str) -> Self {
        Self {
            text: raw.trim().to_string(),
        }
    }

    /// True when nothing was detected
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Terminal outcome of one selection-plus-recognition round
#[derive(Debug)]
pub enum SnipOutcome {
    Cancelled,
    Recognized(RecognizedText),
    Failed(crate::error::SnipError),
}

impl From<crate::error::Result<RecognizedText>> for SnipOutcome {
    fn from(result: crate::error::Result<RecognizedText>) -> Self {
        match result {
            Ok(text) => SnipOutcome::Recognized(text),
            Err(e) if e.is_cancellation() => SnipOutcome::Cancelled,
            Err(e) => SnipOutcome::Failed(e),
        }
    }
}
