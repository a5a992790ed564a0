use std::time::Duration;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::element::DEFAULT_LINE_WIDTH;
use crate::state::AppState;
use crate::tools::Tool;

/// Storage key for the settings in eframe's persistence
pub const SETTINGS_KEY: &str = "layered_canvas_settings";

/// User settings restored between sessions.
///
/// Only tool and style preferences are kept; canvas items are never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old settings
pub struct CanvasSettings {
    pub tool: Option<Tool>,
    pub fill_color: Color32,
    pub line_color: Color32,
    pub line_width: f32,
    pub background_color: Color32,
    /// Minimum time between two preview updates of a live gesture
    pub move_throttle_ms: u64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            tool: Some(Tool::Rectangle),
            fill_color: Color32::BLACK,
            line_color: Color32::BLACK,
            line_width: DEFAULT_LINE_WIDTH,
            background_color: Color32::WHITE,
            move_throttle_ms: 16,
        }
    }
}

impl CanvasSettings {
    pub fn move_throttle(&self) -> Duration {
        Duration::from_millis(self.move_throttle_ms)
    }

    /// Copy the current tool and pending style out of a state snapshot
    pub fn capture(&mut self, state: &AppState) {
        self.tool = state.current_action;
        self.fill_color = state.current_action_fill_color;
        self.line_color = state.current_action_line_color;
        self.line_width = state.current_action_line_width;
    }
}
