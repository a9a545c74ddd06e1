//! Interactive region selection.
//!
//! The surface only delivers events and paints frames; every decision is
//! made by [`SelectionState::handle`], so the geometry can be exercised
//! without a display.

pub mod render;
pub mod state;
pub mod surface;

pub use render::{OverlayFrame, OverlayStyle};
pub use state::{DragGesture, Effect, Key, OverlayEvent, SelectionState};
pub use surface::{OverlaySurface, SurfaceGuard};

use crate::error::Result;
use crate::models::config::OverlayConfig;
use crate::models::rect::ScreenRectangle;
use crate::services::screen_capture::{surface_bounds, DisplayGeometry};

/// How a selection interaction ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Selected(ScreenRectangle),
    Cancelled,
}

/// Full-screen drag-to-select overlay
#[derive(Debug, Clone, Default)]
pub struct SelectionOverlay {
    style: OverlayStyle,
}

impl SelectionOverlay {
    pub fn new(config: &OverlayConfig) -> Self {
        Self {
            style: OverlayStyle::from(config),
        }
    }

    /// Show the overlay and block until the user commits or cancels
    ///
    /// The surface is closed before this returns on every path.
    pub fn run<S: OverlaySurface + ?Sized>(
        &self,
        surface: &mut S,
        geometry: &dyn DisplayGeometry,
    ) -> Result<SelectionOutcome> {
        let bounds = surface_bounds(geometry)?;
        tracing::debug!(
            x = bounds.x,
            y = bounds.y,
            width = bounds.width,
            height = bounds.height,
            "Showing selection overlay"
        );

        let mut surface = SurfaceGuard::acquire(surface, bounds)?;
        surface.redraw(&OverlayFrame::new(bounds, None, self.style))?;

        let mut state = SelectionState::Idle;
        loop {
            let event = surface.next_event()?.unwrap_or(OverlayEvent::Closed);
            let (next, effect) = state.handle(event);

            if let Effect::Redraw(selection) = effect {
                surface.redraw(&OverlayFrame::new(bounds, Some(selection), self.style))?;
            }

            match next {
                SelectionState::Committed(rect) => {
                    tracing::info!(
                        x = rect.x,
                        y = rect.y,
                        width = rect.width,
                        height = rect.height,
                        "Region selected"
                    );
                    return Ok(SelectionOutcome::Selected(rect));
                }
                SelectionState::Cancelled => {
                    tracing::info!("Selection cancelled");
                    return Ok(SelectionOutcome::Cancelled);
                }
                SelectionState::Idle | SelectionState::Dragging(_) => state = next,
            }
        }
    }
}
