//! Draws canvas items onto a [`Surface`].
//!
//! Each item is drawn in a frame pivoted on its center and rotated by its
//! `rotate` angle. The frame is undone in reverse order after every item, so
//! any number of items can share one surface.

use egui::{Pos2, Rect, pos2, vec2};

use crate::element::{CanvasItem, Shape};
use crate::geometry::item_center;
use crate::surface::Surface;

/// Render one item about the pivot `center`.
///
/// The surface's frame is the same after the call as before it.
pub fn render_item<S: Surface + ?Sized>(surface: &mut S, item: &CanvasItem, center: Pos2) {
    let pivot = center.to_vec2();
    let radians = item.rotate.to_radians();

    surface.translate(pivot);
    surface.rotate(radians);
    surface.begin_path();

    match &item.shape {
        Shape::Circle { radius } => {
            surface.arc(Pos2::ZERO, *radius);
            surface.fill();
            surface.stroke();
        }
        Shape::Rectangle { width, height } => {
            let rect = Rect::from_min_size(pos2(-width / 2.0, -height / 2.0), vec2(*width, *height));
            surface.fill_rect(rect);
            surface.stroke_rect(rect);
        }
        Shape::Line { x_offset, y_offset } => {
            surface.move_to(pos2(-x_offset / 2.0, -y_offset / 2.0));
            surface.line_to(pos2(x_offset / 2.0, y_offset / 2.0));
            surface.stroke();
        }
        Shape::Brush { path } => {
            trace_path(surface, item.start - center, path);
            surface.stroke();
        }
        Shape::Polygon { path } => {
            trace_path(surface, item.start - center, path);
            surface.close_path();
            surface.fill();
            surface.stroke();
        }
    }

    surface.rotate(-radians);
    surface.translate(-pivot);
}

/// Walk a relative path, each point shifted by `offset`
fn trace_path<S: Surface + ?Sized>(surface: &mut S, offset: egui::Vec2, path: &[egui::Vec2]) {
    let mut points = path.iter().map(|point| (offset + *point).to_pos2());
    if let Some(first) = points.next() {
        surface.move_to(first);
    }
    for point in points {
        surface.line_to(point);
    }
}

/// Apply an item's colors and line width, then render it about its own center
pub fn render_canvas_item<S: Surface + ?Sized>(surface: &mut S, item: &CanvasItem) {
    surface.set_fill_color(item.fill_color);
    surface.set_stroke_color(item.line_color);
    surface.set_line_width(item.line_width);

    render_item(surface, item, item_center(item));
}

/// Clear the surface and draw every present item in list order.
///
/// Later items draw over earlier ones. Missing entries are skipped, so an
/// empty preview slot can be passed straight through.
pub fn draw_canvas<'a, S, I>(surface: &mut S, items: I)
where
    S: Surface + ?Sized,
    I: IntoIterator,
    I::Item: Into<Option<&'a CanvasItem>>,
{
    surface.clear();
    for entry in items {
        let entry: Option<&CanvasItem> = entry.into();
        if let Some(item) = entry {
            render_canvas_item(surface, item);
        }
    }
}
