use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CanvasError;

/// Enum representing all available tools.
///
/// Creation tools turn a finished gesture into a new canvas item. `Move` and
/// `Rotate` edit the currently selected item instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    Rectangle,
    Circle,
    Line,
    Brush,
    Polygon,
    Move,
    Rotate,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Rectangle,
        Tool::Circle,
        Tool::Line,
        Tool::Brush,
        Tool::Polygon,
        Tool::Move,
        Tool::Rotate,
    ];

    /// Return the name of the tool, as used by tool inputs
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Line => "line",
            Self::Brush => "brush",
            Self::Polygon => "polygon",
            Self::Move => "move",
            Self::Rotate => "rotate",
        }
    }

    /// Label shown on the tool button
    pub fn label(self) -> &'static str {
        match self {
            Self::Rectangle => "▭ Rectangle",
            Self::Circle => "◯ Circle",
            Self::Line => "╱ Line",
            Self::Brush => "🖌 Brush",
            Self::Polygon => "⬟ Polygon",
            Self::Move => "✥ Move",
            Self::Rotate => "⟳ Rotate",
        }
    }

    /// True for tools that create a new item when a gesture completes.
    pub fn creates_item(self) -> bool {
        matches!(
            self,
            Self::Rectangle | Self::Circle | Self::Line | Self::Brush | Self::Polygon
        )
    }

    /// True for tools that edit the selected item.
    pub fn requires_selection(self) -> bool {
        matches!(self, Self::Move | Self::Rotate)
    }

    /// True for tools whose gesture accumulates a freehand path.
    pub fn accumulates_path(self) -> bool {
        matches!(self, Self::Brush | Self::Polygon)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = CanvasError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| CanvasError::UnknownTool(input.to_owned()))
    }
}
