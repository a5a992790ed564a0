//! Drawing surfaces.
//!
//! The renderer talks to a [`Surface`], a small canvas-style API with a
//! translate/rotate frame and a current path. [`PainterSurface`] draws onto an
//! egui painter; [`RecordingSurface`] keeps the call log and is what the tests
//! draw on.

use egui::{Color32, Pos2, Rect, Vec2};

mod painter;
mod recording;
mod tessellate;

pub use painter::PainterSurface;
pub use recording::{RecordingSurface, SurfaceCall};

/// A 2D drawing target with a mutable coordinate frame.
///
/// Points passed to path and rect calls are in the current local frame, i.e.
/// after every `translate` and `rotate` applied so far.
pub trait Surface {
    /// Size of the drawable area
    fn size(&self) -> Vec2;

    /// Wipe everything drawn so far
    fn clear(&mut self);

    fn set_fill_color(&mut self, color: Color32);
    fn set_stroke_color(&mut self, color: Color32);
    fn set_line_width(&mut self, width: f32);

    /// Move the frame origin by `offset`, measured in the current frame
    fn translate(&mut self, offset: Vec2);

    /// Rotate the frame clockwise by `radians` about its origin
    fn rotate(&mut self, radians: f32);

    /// Discard the current path and start a new one
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Pos2);
    fn line_to(&mut self, point: Pos2);

    /// Add a full circle to the current path
    fn arc(&mut self, center: Pos2, radius: f32);

    fn close_path(&mut self);

    /// Fill the current path with the fill color
    fn fill(&mut self);

    /// Outline the current path with the stroke color and line width
    fn stroke(&mut self);

    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);
}

/// Four corners of a rect, in drawing order.
///
/// Works for rects built from negative sizes, where `min` is not the top-left.
pub(crate) fn rect_corners(rect: Rect) -> [Pos2; 4] {
    [
        rect.min,
        Pos2::new(rect.max.x, rect.min.y),
        rect.max,
        Pos2::new(rect.min.x, rect.max.y),
    ]
}
