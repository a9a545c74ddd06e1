use crate::error::{Result, SnipError};
use crate::models::rect::ScreenRectangle;
use image::{DynamicImage, RgbaImage};

/// Point-in-time snapshot of a screen region
///
/// The pixel buffer is owned and never mutated; it is moved into the
/// recognizer and dropped once the backend has consumed the encoded copy.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    pixels: RgbaImage,
    region: ScreenRectangle,
}

impl CapturedImage {
    /// Wrap a freshly captured buffer. Its size must match `region` exactly.
    pub fn new(pixels: RgbaImage, region: ScreenRectangle) -> Result<Self> {
        if pixels.width() != region.width || pixels.height() != region.height {
            return Err(SnipError::CaptureFailure(format!(
                "captured {}x{} pixels for a {}x{} region",
                pixels.width(),
                pixels.height(),
                region.width,
                region.height
            )));
        }

        Ok(Self { pixels, region })
    }

    /// Wrap an image that did not come from the screen, e.g. a file on disk
    pub fn from_image(image: DynamicImage) -> Self {
        let pixels = image.to_rgba8();
        let region = ScreenRectangle::new(0, 0, pixels.width(), pixels.height());
        Self { pixels, region }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Screen region the pixels were taken from
    pub fn region(&self) -> ScreenRectangle {
        self.region
    }

    /// Encode as PNG so the backend never sees the in-memory pixel layout
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.pixels
            .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| SnipError::ImageEncoding(e.to_string()))?;
        Ok(buf)
    }
}
