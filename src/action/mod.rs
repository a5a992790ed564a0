use egui::{Color32, Pos2, Vec2};

use crate::element::{CanvasItemId, ItemPatch};
use crate::tools::Tool;

mod dispatcher;

pub use dispatcher::Dispatcher;

/// Geometry of one gesture tick, as sent by the gesture controller.
#[derive(Debug, Clone, PartialEq)]
pub struct DragPayload {
    pub start: Pos2,
    pub end: Pos2,
    /// Id given to the item if this payload creates one
    pub id: CanvasItemId,
    /// Freehand path relative to `start`, for path tools
    pub path: Option<Vec<Vec2>>,
}

impl DragPayload {
    pub fn new(id: CanvasItemId, start: Pos2, end: Pos2) -> Self {
        Self {
            start,
            end,
            id,
            path: None,
        }
    }

    pub fn with_path(mut self, path: Vec<Vec2>) -> Self {
        self.path = Some(path);
        self
    }

    /// Drag vector from start to end
    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }
}

/// Every transition the store understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Create an item with a creation tool, or move/rotate the selection
    AddOrModifyCanvasItem(DragPayload),
    /// Show a highlighted copy of an item in the preview list
    HighlightCanvasItem(CanvasItemId),
    /// Merge field updates into an existing item
    ModifyCanvasItem { id: CanvasItemId, patch: ItemPatch },
    /// Append a copy of an item under a fresh id
    CopyCanvasItem { id: CanvasItemId, new_id: CanvasItemId },
    RemoveCanvasItem(CanvasItemId),
    RemoveSelectedCanvasItem,
    /// Same derivation as `AddOrModifyCanvasItem`, into the preview list only
    SetPreviewCanvasItem(DragPayload),
    SetSelectedCanvasItem(Option<CanvasItemId>),
    UnsetPreviewCanvasItem,
    UpdateCurrentAction(Option<Tool>),
    UpdateCurrentActionFill(Color32),
    UpdateCurrentActionLine(Color32),
    UpdateCurrentActionLineWidth(f32),
}

impl Action {
    /// Stable tag of the action, for logs
    pub fn tag(&self) -> &'static str {
        match self {
            Self::AddOrModifyCanvasItem(_) => "ADD_OR_MODIFY_CANVAS_ITEM",
            Self::HighlightCanvasItem(_) => "HIGHLIGHT_CANVAS_ITEM",
            Self::ModifyCanvasItem { .. } => "MODIFY_CANVAS_ITEM",
            Self::CopyCanvasItem { .. } => "COPY_CANVAS_ITEM",
            Self::RemoveCanvasItem(_) => "REMOVE_CANVAS_ITEM",
            Self::RemoveSelectedCanvasItem => "REMOVE_SELECTED_CANVAS_ITEM",
            Self::SetPreviewCanvasItem(_) => "SET_PREVIEW_CANVAS_ITEM",
            Self::SetSelectedCanvasItem(_) => "SET_SELECTED_CANVAS_ITEM",
            Self::UnsetPreviewCanvasItem => "UNSET_PREVIEW_CANVAS_ITEM",
            Self::UpdateCurrentAction(_) => "UPDATE_CURRENT_ACTION",
            Self::UpdateCurrentActionFill(_) => "UPDATE_CURRENT_ACTION_FILL",
            Self::UpdateCurrentActionLine(_) => "UPDATE_CURRENT_ACTION_LINE",
            Self::UpdateCurrentActionLineWidth(_) => "UPDATE_CURRENT_ACTION_LINE_WIDTH",
        }
    }
}
