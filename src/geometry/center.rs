use egui::{Pos2, Rect, Vec2, vec2};

use crate::element::{CanvasItem, Shape};

/// Calculate the bounding box for a set of relative points.
///
/// Returns `None` for an empty path.
pub fn bounding_box(points: &[Vec2]) -> Option<Rect> {
    let first = points.first()?;

    let mut min = *first;
    let mut max = *first;
    for point in &points[1..] {
        min = min.min(*point);
        max = max.max(*point);
    }

    Some(Rect::from_min_max(min.to_pos2(), max.to_pos2()))
}

/// Rotation pivot of an item, in canvas coordinates.
///
/// Total over every shape: path kinds use the middle of the path's bounding
/// box (an empty path degrades to the anchor), circles pivot on the anchor.
pub fn item_center(item: &CanvasItem) -> Pos2 {
    let offset = match &item.shape {
        Shape::Brush { path } | Shape::Polygon { path } => {
            bounding_box(path).map_or(Vec2::ZERO, |bounds| bounds.center().to_vec2())
        }
        Shape::Line { x_offset, y_offset } => vec2(x_offset / 2.0, y_offset / 2.0),
        Shape::Rectangle { width, height } => vec2(width / 2.0, height / 2.0),
        Shape::Circle { .. } => Vec2::ZERO,
    };

    item.start + offset
}
