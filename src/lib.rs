//! Select a screen region and extract its text.
//!
//! A host shows the [`SelectionOverlay`] on its UI thread, hands the
//! committed rectangle to a [`CaptureRecognizer`] and gets back text or a
//! typed [`SnipError`]. [`SnipSession`] wires both together with the
//! recognition running off the UI thread.

pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{Result, SnipError};
pub use logging::init_logging;
pub use models::captured_image::CapturedImage;
pub use models::config::{AppConfig, OCR_LANGUAGE};
pub use models::recognition::{RecognizedText, SnipOutcome};
pub use models::rect::{Point, ScreenRectangle};
pub use services::config::ConfigManager;
pub use services::ocr::{OcrBackend, TessdataLocation, TessdataResolver};
pub use services::overlay::{OverlayEvent, OverlaySurface, SelectionOutcome, SelectionOverlay};
pub use services::recognizer::CaptureRecognizer;
pub use services::screen_capture::{CapturePrimitive, DisplayGeometry};
pub use services::session::{PendingRecognition, SnipSession};
