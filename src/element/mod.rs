use egui::{Color32, Pos2, Vec2};
use serde::{Deserialize, Serialize};

mod common;

pub use common::{DEFAULT_LINE_WIDTH, FULL_TURN_DEGREES, HIGHLIGHT_COLOR, normalize_degrees};

/// Identifier of a persisted canvas item
pub type CanvasItemId = usize;

/// Geometry of a canvas item, one variant per shape kind.
///
/// All coordinates are relative to the item's anchor (`CanvasItem::start`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Signed extents from the anchor
    Rectangle { width: f32, height: f32 },
    /// Distance from the anchor to the drag end
    Circle { radius: f32 },
    /// Signed vector from the anchor to the drag end
    Line { x_offset: f32, y_offset: f32 },
    /// Open freehand stroke
    Brush { path: Vec<Vec2> },
    /// Closed freehand outline
    Polygon { path: Vec<Vec2> },
}

impl Shape {
    /// Get the shape kind as a string
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rectangle { .. } => "rectangle",
            Self::Circle { .. } => "circle",
            Self::Line { .. } => "line",
            Self::Brush { .. } => "brush",
            Self::Polygon { .. } => "polygon",
        }
    }

    /// Glyph used for the shape in the layer list
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Rectangle { .. } => "▭",
            Self::Circle { .. } => "◯",
            Self::Line { .. } => "╱",
            Self::Brush { .. } => "🖌",
            Self::Polygon { .. } => "⬟",
        }
    }

    /// Freehand path, for the kinds that carry one
    pub fn path(&self) -> Option<&[Vec2]> {
        match self {
            Self::Brush { path } | Self::Polygon { path } => Some(path),
            _ => None,
        }
    }
}

/// A single persisted or previewed shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasItem {
    pub id: CanvasItemId,
    pub fill_color: Color32,
    pub line_color: Color32,
    pub line_width: f32,
    /// Rotation in degrees, kept in `[0, 360)`
    pub rotate: f32,
    /// Anchor point, in canvas coordinates
    pub start: Pos2,
    pub shape: Shape,
}

impl CanvasItem {
    /// Copy of this item with its anchor shifted by `delta`
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            start: self.start + delta,
            ..self.clone()
        }
    }

    /// Copy of this item rotated by a further `degrees`
    pub fn rotated(&self, degrees: f32) -> Self {
        Self {
            rotate: normalize_degrees(self.rotate + degrees),
            ..self.clone()
        }
    }

    /// Copy of this item with both colors forced to `color`
    pub fn highlighted(&self, color: Color32) -> Self {
        Self {
            fill_color: color,
            line_color: color,
            ..self.clone()
        }
    }

    /// Copy of this item under a different id
    pub fn with_id(&self, id: CanvasItemId) -> Self {
        Self { id, ..self.clone() }
    }

    /// Merge the populated fields of `patch` into a copy of this item
    pub fn patched(&self, patch: &ItemPatch) -> Self {
        Self {
            fill_color: patch.fill_color.unwrap_or(self.fill_color),
            line_color: patch.line_color.unwrap_or(self.line_color),
            line_width: patch.line_width.unwrap_or(self.line_width),
            rotate: patch.rotate.map_or(self.rotate, normalize_degrees),
            ..self.clone()
        }
    }
}

/// Field updates for an existing item; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub fill_color: Option<Color32>,
    pub line_color: Option<Color32>,
    pub line_width: Option<f32>,
    pub rotate: Option<f32>,
}

impl ItemPatch {
    pub fn fill_color(color: Color32) -> Self {
        Self {
            fill_color: Some(color),
            ..Self::default()
        }
    }

    pub fn line_color(color: Color32) -> Self {
        Self {
            line_color: Some(color),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Pending draw style copied onto every newly created item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub fill_color: Color32,
    pub line_color: Color32,
    pub line_width: f32,
}

/// Factory functions for creating items from a finished drag
pub mod factory {
    use super::*;
    use crate::action::DragPayload;
    use crate::tools::Tool;

    /// Build a new item for a creation tool.
    ///
    /// Returns `None` for tools that do not create items (`Move`, `Rotate`).
    /// A path tool without a path produces an item with an empty path.
    pub fn create_from_drag(tool: Tool, payload: &DragPayload, style: &ItemStyle) -> Option<CanvasItem> {
        let drag = payload.end - payload.start;
        let shape = match tool {
            Tool::Rectangle => Shape::Rectangle {
                width: drag.x,
                height: drag.y,
            },
            Tool::Circle => Shape::Circle {
                radius: drag.length(),
            },
            Tool::Line => Shape::Line {
                x_offset: drag.x,
                y_offset: drag.y,
            },
            Tool::Brush => Shape::Brush {
                path: payload.path.clone().unwrap_or_default(),
            },
            Tool::Polygon => Shape::Polygon {
                path: payload.path.clone().unwrap_or_default(),
            },
            Tool::Move | Tool::Rotate => return None,
        };

        Some(CanvasItem {
            id: payload.id,
            fill_color: style.fill_color,
            line_color: style.line_color,
            line_width: style.line_width,
            rotate: 0.0,
            start: payload.start,
            shape,
        })
    }

    /// Create a rectangle item directly
    pub fn create_rectangle(id: CanvasItemId, start: Pos2, size: Vec2, style: &ItemStyle) -> CanvasItem {
        CanvasItem {
            id,
            fill_color: style.fill_color,
            line_color: style.line_color,
            line_width: style.line_width,
            rotate: 0.0,
            start,
            shape: Shape::Rectangle {
                width: size.x,
                height: size.y,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn item() -> CanvasItem {
        factory::create_rectangle(
            1,
            pos2(10.0, 10.0),
            vec2(4.0, 2.0),
            &ItemStyle {
                fill_color: Color32::BLACK,
                line_color: Color32::BLACK,
                line_width: DEFAULT_LINE_WIDTH,
            },
        )
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let patched = item().patched(&ItemPatch::fill_color(Color32::GREEN));
        assert_eq!(patched.fill_color, Color32::GREEN);
        assert_eq!(patched.line_color, Color32::BLACK);
        assert_eq!(patched.shape, item().shape);
        assert!(ItemPatch::default().is_empty());
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(item().rotated(350.0).rotated(20.0).rotate, 10.0);
        assert_eq!(item().rotated(-30.0).rotate, 330.0);
    }
}
