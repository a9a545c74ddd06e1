use crate::error::{Result, SnipError};
use crate::models::captured_image::CapturedImage;
use crate::models::config::OCR_LANGUAGE;
use crate::models::recognition::RecognizedText;
use crate::models::rect::ScreenRectangle;
use crate::services::ocr::engine::OcrBackend;
use crate::services::ocr::tessdata::{TessdataLocation, TessdataResolver};
use crate::services::screen_capture::CapturePrimitive;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Turns a committed screen region into text
///
/// Holds no mutable state between calls; the tessdata directory is resolved
/// again for every operation.
pub struct CaptureRecognizer {
    capturer: Arc<dyn CapturePrimitive>,
    backend: Arc<dyn OcrBackend>,
    resolver: TessdataResolver,
}

impl CaptureRecognizer {
    pub fn new(
        capturer: Arc<dyn CapturePrimitive>,
        backend: Arc<dyn OcrBackend>,
        resolver: TessdataResolver,
    ) -> Self {
        Self {
            capturer,
            backend,
            resolver,
        }
    }

    /// xcap capture, Tesseract recognition and the platform tessdata lookup
    #[cfg(feature = "native")]
    pub fn native(config: &crate::models::config::OcrConfig) -> Self {
        use crate::services::ocr::{SystemLocations, TesseractBackend};
        use crate::services::screen_capture::XcapScreen;

        Self::new(
            Arc::new(XcapScreen::new()),
            Arc::new(TesseractBackend::new(config.page_segmentation)),
            TessdataResolver::new(Arc::new(SystemLocations), config.tessdata_dir.clone()),
        )
    }

    /// Snapshot the live screen contents of `rect`
    pub fn capture_pixels(&self, rect: ScreenRectangle) -> Result<CapturedImage> {
        if rect.is_empty() {
            return Err(SnipError::SelectionCancelled);
        }

        let pixels = self.capturer.capture(rect).map_err(|e| {
            tracing::warn!(error = %e, "Screen capture failed");
            e
        })?;
        let image = CapturedImage::new(pixels, rect)?;

        tracing::debug!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "Captured region"
        );
        Ok(image)
    }

    /// Locate a tessdata directory that exists right now
    pub fn resolve_data_directory(&self) -> Option<TessdataLocation> {
        self.resolver.resolve()
    }

    /// Run OCR over `image`, consuming it
    pub fn recognize(
        &self,
        image: CapturedImage,
        data_dir: &TessdataLocation,
    ) -> Result<RecognizedText> {
        if !data_dir.still_exists() {
            tracing::warn!(tessdata = %data_dir.path().display(), "tessdata directory vanished");
            return Err(SnipError::DataDirectoryMissing(data_dir.path().to_path_buf()));
        }
        if !data_dir.has_language(OCR_LANGUAGE) {
            tracing::warn!(
                tessdata = %data_dir.path().display(),
                language = OCR_LANGUAGE,
                "Language data file not found, recognition will likely fail"
            );
        }

        let started = Instant::now();
        let (width, height) = (image.width(), image.height());
        let png = image.to_png_bytes()?;
        drop(image);

        let raw = self
            .backend
            .recognize(&png, data_dir.path(), OCR_LANGUAGE)
            .map_err(|e| match e {
                SnipError::RecognitionFailure(_) => e,
                other => SnipError::RecognitionFailure(other.to_string()),
            })?;
        let text = RecognizedText::from_raw(&raw);

        tracing::info!(
            backend = self.backend.name(),
            width,
            height,
            chars = text.text.chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Recognition finished"
        );
        Ok(text)
    }

    /// Resolve tessdata, capture `rect`, then recognize
    ///
    /// Without a tessdata directory nothing is captured.
    pub fn capture_and_recognize(&self, rect: ScreenRectangle) -> Result<RecognizedText> {
        let data_dir = self
            .resolve_data_directory()
            .ok_or(SnipError::MissingDataDirectory)?;
        let image = self.capture_pixels(rect)?;
        self.recognize(image, &data_dir)
    }

    /// Recognize text in an image file instead of a screen region
    pub fn recognize_file(&self, path: &Path) -> Result<RecognizedText> {
        let data_dir = self
            .resolve_data_directory()
            .ok_or(SnipError::MissingDataDirectory)?;

        let image = image::open(path).map_err(|e| {
            SnipError::RecognitionFailure(format!("Failed to open {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "Loaded image file");

        self.recognize(CapturedImage::from_image(image), &data_dir)
    }
}
