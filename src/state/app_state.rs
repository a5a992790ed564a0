use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::element::{CanvasItem, CanvasItemId, DEFAULT_LINE_WIDTH, ItemStyle};
use crate::settings::CanvasSettings;
use crate::tools::Tool;

/// The single source of truth for the canvas.
///
/// Snapshots are immutable once published by the store; every transition
/// builds a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Persisted items, in stacking order (newest last)
    pub current_canvas_item_list: Vec<CanvasItem>,
    /// At most one transient item: the live gesture or a hover highlight
    pub preview_canvas_item_list: Vec<CanvasItem>,
    /// Armed tool, `None` when no tool is active
    pub current_action: Option<Tool>,
    pub current_action_fill_color: Color32,
    pub current_action_line_color: Color32,
    pub current_action_line_width: f32,
    /// Lookup key into `current_canvas_item_list`
    pub selected_canvas_item_id: Option<CanvasItemId>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_canvas_item_list: Vec::new(),
            preview_canvas_item_list: Vec::new(),
            current_action: Some(Tool::Rectangle),
            current_action_fill_color: Color32::BLACK,
            current_action_line_color: Color32::BLACK,
            current_action_line_width: DEFAULT_LINE_WIDTH,
            selected_canvas_item_id: None,
        }
    }
}

impl AppState {
    /// Initial state built from the user's settings
    pub fn from_settings(settings: &CanvasSettings) -> Self {
        Self {
            current_action: settings.tool,
            current_action_fill_color: settings.fill_color,
            current_action_line_color: settings.line_color,
            current_action_line_width: settings.line_width,
            ..Self::default()
        }
    }

    pub fn find_item(&self, id: CanvasItemId) -> Option<&CanvasItem> {
        self.current_canvas_item_list.iter().find(|item| item.id == id)
    }

    pub fn contains_item(&self, id: CanvasItemId) -> bool {
        self.find_item(id).is_some()
    }

    pub fn selected_item(&self) -> Option<&CanvasItem> {
        self.selected_canvas_item_id.and_then(|id| self.find_item(id))
    }

    /// Style copied onto items created from this state
    pub fn pending_style(&self) -> ItemStyle {
        ItemStyle {
            fill_color: self.current_action_fill_color,
            line_color: self.current_action_line_color,
            line_width: self.current_action_line_width,
        }
    }
}
