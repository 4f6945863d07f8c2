//! Viewport ↔ logical canvas coordinate mapping
//!
//! Tables are stored and compared in logical canvas units only. The viewport
//! rect (the on-screen bounding box of the rendering surface) changes with
//! window resizes and device pixel ratio; the canvas size never does.
//!
//! The mapping is an affine scale-and-translate with an independent scale
//! per axis, so a viewport with a different aspect ratio stretches rather
//! than letterboxes.

use shared::models::{Point, Rect, Size};

/// Converts between viewport pixels and the fixed logical canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    canvas: Size,
}

impl CoordinateMapper {
    pub const fn new(canvas: Size) -> Self {
        Self { canvas }
    }

    #[inline]
    pub const fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Screen point → logical point.
    ///
    /// A degenerate viewport (not yet laid out) maps everything to the
    /// logical origin.
    pub fn to_logical(&self, screen: Point, viewport: Rect) -> Point {
        if viewport.is_empty() {
            return Point::ORIGIN;
        }
        let scale_x = self.canvas.width / viewport.width;
        let scale_y = self.canvas.height / viewport.height;
        Point::new(
            (screen.x - viewport.x) * scale_x,
            (screen.y - viewport.y) * scale_y,
        )
    }

    /// Logical point → screen point.
    ///
    /// A degenerate viewport maps everything to the viewport origin.
    pub fn to_screen(&self, logical: Point, viewport: Rect) -> Point {
        if viewport.is_empty() {
            return viewport.origin();
        }
        let scale_x = viewport.width / self.canvas.width;
        let scale_y = viewport.height / self.canvas.height;
        Point::new(
            logical.x * scale_x + viewport.x,
            logical.y * scale_y + viewport.y,
        )
    }

    /// Logical rectangle → screen rectangle (for the render layer)
    pub fn rect_to_screen(&self, logical: Rect, viewport: Rect) -> Rect {
        if viewport.is_empty() {
            return Rect::from_parts(viewport.origin(), Size::default());
        }
        let origin = self.to_screen(logical.origin(), viewport);
        Rect::new(
            origin.x,
            origin.y,
            logical.width * viewport.width / self.canvas.width,
            logical.height * viewport.height / self.canvas.height,
        )
    }
}
