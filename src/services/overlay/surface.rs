use super::render::OverlayFrame;
use super::state::OverlayEvent;
use crate::error::Result;
use crate::models::rect::ScreenRectangle;
use std::ops::{Deref, DerefMut};

/// The full-screen capture surface supplied by the windowing toolkit
///
/// Implementations are transparent, topmost and borderless, and live on the
/// UI thread; no `Send` bound is required.
pub trait OverlaySurface {
    /// Show the surface over `bounds`
    fn show(&mut self, bounds: ScreenRectangle) -> Result<()>;

    /// Block until the next input event; `None` once the host has torn the
    /// surface down
    fn next_event(&mut self) -> Result<Option<OverlayEvent>>;

    /// Repaint with the given frame
    fn redraw(&mut self, frame: &OverlayFrame) -> Result<()>;

    /// Release the surface. Called once per interaction, including after a
    /// failed `show`.
    fn close(&mut self);
}

/// Scoped ownership of a shown surface; closes it on drop
pub struct SurfaceGuard<'a, S: OverlaySurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: OverlaySurface + ?Sized> SurfaceGuard<'a, S> {
    /// Show `surface` over `bounds`. If showing fails the surface is still
    /// closed before the error is returned.
    pub fn acquire(surface: &'a mut S, bounds: ScreenRectangle) -> Result<Self> {
        let mut guard = Self { surface };
        guard.surface.show(bounds)?;
        Ok(guard)
    }
}

impl<S: OverlaySurface + ?Sized> Deref for SurfaceGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: OverlaySurface + ?Sized> DerefMut for SurfaceGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: OverlaySurface + ?Sized> Drop for SurfaceGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.close();
        tracing::debug!("Overlay surface closed");
    }
}
