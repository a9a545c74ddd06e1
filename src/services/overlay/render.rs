use crate::models::config::OverlayConfig;
use crate::models::rect::ScreenRectangle;
use image::{Rgba, RgbaImage};

/// Colors and stroke of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    pub backdrop: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub outline_width: u32,
}

impl From<&OverlayConfig> for OverlayStyle {
    fn from(config: &OverlayConfig) -> Self {
        Self {
            backdrop: Rgba([0, 0, 0, config.backdrop_alpha()]),
            outline: Rgba(config.outline_color),
            outline_width: config.outline_width.max(1),
        }
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::from(&OverlayConfig::default())
    }
}

/// One repaint of the overlay surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayFrame {
    /// Screen area covered by the surface
    pub bounds: ScreenRectangle,
    /// Selection outline in screen coordinates; empty selections draw nothing
    pub outline: Option<ScreenRectangle>,
    pub style: OverlayStyle,
}

impl OverlayFrame {
    pub fn new(
        bounds: ScreenRectangle,
        selection: Option<ScreenRectangle>,
        style: OverlayStyle,
    ) -> Self {
        Self {
            bounds,
            outline: selection.filter(|rect| !rect.is_empty()),
            style,
        }
    }

    /// Outline relative to the surface's top-left corner
    pub fn local_outline(&self) -> Option<ScreenRectangle> {
        self.outline
            .map(|rect| rect.offset_from(self.bounds.origin()))
    }

    /// Software rendering for surfaces that can only blit pixels
    pub fn rasterize(&self) -> RgbaImage {
        let mut canvas =
            RgbaImage::from_pixel(self.bounds.width, self.bounds.height, self.style.backdrop);

        if let Some(rect) = self.local_outline() {
            let t = self.style.outline_width;
            let color = self.style.outline;
            let edge_x = rect.x2() - t.min(rect.width) as i32;
            let edge_y = rect.y2() - t.min(rect.height) as i32;

            fill_rect(&mut canvas, ScreenRectangle::new(rect.x, rect.y, rect.width, t), color);
            fill_rect(&mut canvas, ScreenRectangle::new(rect.x, edge_y, rect.width, t), color);
            fill_rect(&mut canvas, ScreenRectangle::new(rect.x, rect.y, t, rect.height), color);
            fill_rect(&mut canvas, ScreenRectangle::new(edge_x, rect.y, t, rect.height), color);
        }

        canvas
    }
}

/// Fill `rect`, clipped to the canvas
fn fill_rect(canvas: &mut RgbaImage, rect: ScreenRectangle, color: Rgba<u8>) {
    let canvas_rect = ScreenRectangle::new(0, 0, canvas.width(), canvas.height());
    let Some(visible) = rect.intersection(&canvas_rect) else {
        return;
    };

    for y in visible.y..visible.y2() {
        for x in visible.x..visible.x2() {
            canvas.put_pixel(x as u32, y as u32, color);
        }
    }
}
