//! Seams to the host toolkit.
//!
//! The physics never draws or reads input itself. A host provides a
//! [`Surface`] (live dimensions plus a redraw request) and a [`Canvas`]
//! that can shift its coordinate space.

use crate::direction::Extent;

/// The scrollable surface an [`AxisManager`](crate::AxisManager) animates.
///
/// Dimensions are queried on every pull, never cached, so resizes take
/// effect immediately. All methods are called on the UI thread.
pub trait Surface {
    /// Current width in pixels.
    fn width(&self) -> i32;

    /// Current height in pixels.
    fn height(&self) -> i32;

    /// Requests a redraw. Called once per distinct offset change.
    fn invalidate(&self);

    /// Reads the dimension an edge measures against.
    fn extent(&self, extent: Extent) -> i32 {
        match extent {
            Extent::Width => self.width(),
            Extent::Height => self.height(),
        }
    }
}

/// A render target whose coordinate space can be translated.
pub trait Canvas {
    fn translate(&mut self, dx: f32, dy: f32);
}

/// Translates a canvas for as long as the guard lives.
///
/// The inverse translation runs in `Drop`, so the canvas is restored even
/// when the render body unwinds.
pub(crate) struct TranslateGuard<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    dx: f32,
    dy: f32,
}

impl<'a, C: Canvas + ?Sized> TranslateGuard<'a, C> {
    pub(crate) fn new(canvas: &'a mut C, dx: f32, dy: f32) -> Self {
        canvas.translate(dx, dy);
        Self { canvas, dx, dy }
    }

    pub(crate) fn canvas(&mut self) -> &mut C {
        &mut *self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for TranslateGuard<'_, C> {
    fn drop(&mut self) {
        self.canvas.translate(-self.dx, -self.dy);
    }
}
