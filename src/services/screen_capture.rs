use crate::error::{Result, SnipError};
use crate::models::rect::ScreenRectangle;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// One attached display in virtual-screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayInfo {
    pub bounds: ScreenRectangle,
    pub is_primary: bool,
}

/// Platform display-geometry query
pub trait DisplayGeometry: Send + Sync {
    /// All displays the platform reports. Platforms without multi-display
    /// geometry report just the primary display.
    fn displays(&self) -> Result<Vec<DisplayInfo>>;
}

/// Platform screen-capture primitive
pub trait CapturePrimitive: Send + Sync {
    /// Copy the live screen contents of `rect` into a buffer of exactly
    /// `rect.width` x `rect.height` pixels.
    fn capture(&self, rect: ScreenRectangle) -> Result<RgbaImage>;
}

/// Area the overlay surface has to cover: the union of every display
///
/// Falls back to the primary display when the reported displays cannot be
/// combined into one rectangle.
pub fn surface_bounds(geometry: &dyn DisplayGeometry) -> Result<ScreenRectangle> {
    let displays: Vec<DisplayInfo> = geometry
        .displays()?
        .into_iter()
        .filter(|d| !d.bounds.is_empty())
        .collect();

    let (first, rest) = displays.split_first().ok_or(SnipError::NoDisplay)?;
    let union = rest
        .iter()
        .try_fold(first.bounds, |acc, d| acc.checked_union(&d.bounds));

    match union {
        Some(bounds) => Ok(bounds),
        None => {
            let primary = displays.iter().find(|d| d.is_primary).unwrap_or(first);
            tracing::warn!(
                count = displays.len(),
                "Display layout exceeds the coordinate space, covering the primary display only"
            );
            Ok(primary.bounds)
        }
    }
}

/// Cut `rect` out of a full capture of one display
///
/// `display` is the display's logical bounds and `display_pixels` its
/// capture, which may be larger on HiDPI screens. The part of `rect` that
/// falls outside the display stays transparent so the result is always
/// exactly the size of `rect`.
pub fn compose_region(
    rect: ScreenRectangle,
    display: ScreenRectangle,
    display_pixels: &RgbaImage,
) -> Result<RgbaImage> {
    if display.is_empty() || display_pixels.width() == 0 || display_pixels.height() == 0 {
        return Err(SnipError::CaptureFailure("display reported an empty size".into()));
    }

    let visible = rect.intersection(&display).ok_or_else(|| {
        SnipError::CaptureFailure(format!(
            "region {}x{} at ({}, {}) lies outside the display",
            rect.width, rect.height, rect.x, rect.y
        ))
    })?;

    // Logical to physical pixels, e.g. 2.0 on Retina
    let scale_x = display_pixels.width() as f64 / display.width as f64;
    let scale_y = display_pixels.height() as f64 / display.height as f64;

    let local = visible.offset_from(display.origin());
    let physical_x = (local.x as f64 * scale_x) as u32;
    let physical_y = (local.y as f64 * scale_y) as u32;
    let physical_width = ((local.width as f64 * scale_x).round() as u32)
        .max(1)
        .min(display_pixels.width().saturating_sub(physical_x));
    let physical_height = ((local.height as f64 * scale_y).round() as u32)
        .max(1)
        .min(display_pixels.height().saturating_sub(physical_y));

    let mut cropped = imageops::crop_imm(
        display_pixels,
        physical_x,
        physical_y,
        physical_width,
        physical_height,
    )
    .to_image();

    if cropped.dimensions() != (visible.width, visible.height) {
        cropped = imageops::resize(&cropped, visible.width, visible.height, FilterType::Triangle);
    }

    let mut region = RgbaImage::new(rect.width, rect.height);
    imageops::replace(
        &mut region,
        &cropped,
        visible.x as i64 - rect.x as i64,
        visible.y as i64 - rect.y as i64,
    );

    Ok(region)
}

#[cfg(feature = "native")]
pub use xcap_screen::XcapScreen;

#[cfg(feature = "native")]
mod xcap_screen {
    use super::*;
    use xcap::Monitor;

    /// Screen access through xcap
    ///
    /// Monitors are enumerated on every call so hot-plugged displays and
    /// resolution changes are picked up between snips.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct XcapScreen;

    impl XcapScreen {
        pub fn new() -> Self {
            Self
        }

        fn bounds_of(monitor: &Monitor) -> Result<ScreenRectangle> {
            let x = monitor.x().map_err(capture_err)?;
            let y = monitor.y().map_err(capture_err)?;
            let width = monitor.width().map_err(capture_err)?;
            let height = monitor.height().map_err(capture_err)?;
            Ok(ScreenRectangle::new(x, y, width, height))
        }
    }

    fn capture_err(e: xcap::XCapError) -> SnipError {
        SnipError::CaptureFailure(e.to_string())
    }

    impl DisplayGeometry for XcapScreen {
        fn displays(&self) -> Result<Vec<DisplayInfo>> {
            let monitors = Monitor::all().map_err(capture_err)?;

            let mut displays = Vec::with_capacity(monitors.len());
            for monitor in &monitors {
                displays.push(DisplayInfo {
                    bounds: Self::bounds_of(monitor)?,
                    is_primary: monitor.is_primary().unwrap_or(false),
                });
            }

            tracing::debug!(count = displays.len(), "Enumerated displays");
            Ok(displays)
        }
    }

    impl CapturePrimitive for XcapScreen {
        fn capture(&self, rect: ScreenRectangle) -> Result<RgbaImage> {
            let monitor = Monitor::from_point(rect.x, rect.y).map_err(capture_err)?;
            let display = Self::bounds_of(&monitor)?;

            let full = monitor.capture_image().map_err(capture_err)?;

            tracing::debug!(
                display_width = display.width,
                display_height = display.height,
                pixels_width = full.width(),
                pixels_height = full.height(),
                "Captured display"
            );

            compose_region(rect, display, &full)
        }
    }

}
