use crate::error::Result;
use std::path::Path;

/// OCR backend trait - abstraction over the recognition engine
///
/// The engine is built from `data_dir` and `language` inside each call and
/// dropped before the call returns, so two concurrent calls never share an
/// engine instance.
pub trait OcrBackend: Send + Sync {
    /// Recognize text from a PNG-encoded image
    ///
    /// Returns the raw engine output; trimming is left to the caller.
    fn recognize(&self, png: &[u8], data_dir: &Path, language: &str) -> Result<String>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
