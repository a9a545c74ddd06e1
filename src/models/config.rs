use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Recognition language. Fixed; multi-language setups are not supported.
pub const OCR_LANGUAGE: &str = "eng";

/// Tesseract page segmentation mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PageSegmentation {
    Auto,
    SingleBlock,
    SingleLine,
}

impl Default for PageSegmentation {
    fn default() -> Self {
        Self::Auto
    }
}

/// OCR configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OcrConfig {
    /// User-chosen tessdata directory, tried before the well-known locations
    #[serde(default)]
    pub tessdata_dir: Option<PathBuf>,
    #[serde(default)]
    pub page_segmentation: PageSegmentation,
}

/// Look of the selection overlay
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    /// Opacity of the dimmed backdrop, 0.0 to 1.0
    pub backdrop_opacity: f32,
    /// RGBA outline color
    pub outline_color: [u8; 4],
    /// Outline thickness in pixels
    pub outline_width: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            backdrop_opacity: 0.25,
            outline_color: [255, 0, 0, 255],
            outline_width: 2,
        }
    }
}

impl OverlayConfig {
    /// Backdrop alpha byte, with the opacity clamped into range
    pub fn backdrop_alpha(&self) -> u8 {
        (self.backdrop_opacity.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub ocr: OcrConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
