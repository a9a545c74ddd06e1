use super::engine::OcrBackend;
use crate::error::{Result, SnipError};
use crate::models::config::PageSegmentation;
use std::path::Path;
use tesseract::{PageSegMode, Tesseract};

/// Tesseract OCR backend
pub struct TesseractBackend {
    page_segmentation: PageSegmentation,
    // Tesseract instance will be created per-call for thread safety
}

impl TesseractBackend {
    pub fn new(page_segmentation: PageSegmentation) -> Self {
        Self { page_segmentation }
    }

    fn page_seg_mode(&self) -> PageSegMode {
        match self.page_segmentation {
            PageSegmentation::Auto => PageSegMode::PsmAuto,
            PageSegmentation::SingleBlock => PageSegMode::PsmSingleBlock,
            PageSegmentation::SingleLine => PageSegMode::PsmSingleLine,
        }
    }
}

impl Default for TesseractBackend {
    fn default() -> Self {
        Self::new(PageSegmentation::default())
    }
}

impl OcrBackend for TesseractBackend {
    fn recognize(&self, png: &[u8], data_dir: &Path, language: &str) -> Result<String> {
        let data_path = data_dir.to_str().ok_or_else(|| {
            SnipError::RecognitionFailure(format!(
                "tessdata path is not valid UTF-8: {}",
                data_dir.display()
            ))
        })?;

        let mut tesseract = Tesseract::new(Some(data_path), Some(language)).map_err(|e| {
            SnipError::RecognitionFailure(format!("Failed to create Tesseract instance: {}", e))
        })?;
        tesseract.set_page_seg_mode(self.page_seg_mode());

        let text = tesseract
            .set_image_from_mem(png)
            .map_err(|e| SnipError::RecognitionFailure(format!("Failed to set image: {}", e)))?
            .get_text()
            .map_err(|e| {
                SnipError::RecognitionFailure(format!("Failed to recognize text: {}", e))
            })?;

        Ok(text)
    }

    fn name(&self) -> &'static str {
        "tesseract"
    }
}
