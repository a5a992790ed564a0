//! Turns pointer input into canvas actions.
//!
//! A gesture runs from a primary pointer-down inside the canvas to the next
//! primary pointer-up anywhere:
//!
//! ```text
//!            pointer down (in canvas)
//!   ┌──────┐ ──────────────────────► ┌──────────┐ ──┐ pointer move
//!   │ Idle │                         │ Dragging │   │ (throttled):
//!   └──────┘ ◄────────────────────── └──────────┘ ◄─┘ SetPreviewCanvasItem
//!            pointer up: AddOrModifyCanvasItem, UnsetPreviewCanvasItem
//!            cancel:     UnsetPreviewCanvasItem
//! ```
//!
//! Moves and ups are only observed while `Dragging`, so once a gesture ends
//! nothing more is emitted for it.

use std::time::Duration;

use egui::{PointerButton, Pos2, Vec2};
use log::{debug, trace};

use super::InputEvent;
use crate::action::{Action, DragPayload};
use crate::element::CanvasItemId;
use crate::error::{CanvasError, CanvasResult};
use crate::id_generator::IdGenerator;
use crate::tools::Tool;

/// Configuration for gesture handling
#[derive(Debug, Clone)]
pub struct GestureConfig {
    /// Minimum time between two preview updates
    pub move_interval: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            move_interval: Duration::from_millis(16),
        }
    }
}

/// Context of the gesture in progress
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveGesture {
    /// Correlation id, also the id of an item this gesture creates
    pub id: CanvasItemId,
    pub tool: Tool,
    pub start: Pos2,
    /// Points relative to `start`, for path tools
    pub path: Vec<Vec2>,
    last_emit: Option<f64>,
}

impl ActiveGesture {
    fn new(id: CanvasItemId, tool: Tool, start: Pos2) -> Self {
        let path = if tool.accumulates_path() {
            vec![Vec2::ZERO]
        } else {
            Vec::new()
        };
        Self {
            id,
            tool,
            start,
            path,
            last_emit: None,
        }
    }

    fn push_point(&mut self, end: Pos2) {
        if !self.tool.accumulates_path() {
            return;
        }
        let point = end - self.start;
        if self.path.last() != Some(&point) {
            self.path.push(point);
        }
    }

    fn payload(&self, end: Pos2) -> DragPayload {
        let payload = DragPayload::new(self.id, self.start, end);
        if self.tool.accumulates_path() {
            payload.with_path(self.path.clone())
        } else {
            payload
        }
    }
}

/// The possible states of the gesture controller
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down
    #[default]
    Idle,
    /// Pointer is held down after starting inside the canvas
    Dragging(ActiveGesture),
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn active_gesture(&self) -> Option<&ActiveGesture> {
        match self {
            Self::Dragging(gesture) => Some(gesture),
            Self::Idle => None,
        }
    }
}

/// Tracks one gesture at a time and emits the actions it implies
#[derive(Debug, Default)]
pub struct GestureController {
    config: GestureConfig,
    state: GestureState,
    ids: IdGenerator,
}

impl GestureController {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: GestureState::Idle,
            ids: IdGenerator::new(),
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Take a fresh id from the same sequence gestures use
    pub fn allocate_id(&mut self) -> CanvasItemId {
        self.ids.generate_id()
    }

    /// Start a gesture at `position` with the armed tool.
    ///
    /// Returns the gesture's correlation id. While a gesture is already live
    /// the call is ignored and the live gesture's id is returned.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::NoActiveTool` when no tool is armed.
    pub fn pointer_down(&mut self, position: Pos2, tool: Option<Tool>) -> CanvasResult<CanvasItemId> {
        if let GestureState::Dragging(gesture) = &self.state {
            debug!("Pointer down during gesture {}, ignoring", gesture.id);
            return Ok(gesture.id);
        }
        let tool = tool.ok_or(CanvasError::NoActiveTool)?;

        let id = self.ids.generate_id();
        debug!("Gesture {id} started with {tool} at {position:?}");
        self.state = GestureState::Dragging(ActiveGesture::new(id, tool, position));
        Ok(id)
    }

    /// Handle a pointer move at time `now` (seconds).
    ///
    /// Emits a preview update at most once per configured interval; the first
    /// move of a gesture always emits.
    pub fn pointer_move(&mut self, position: Pos2, now: f64) -> Option<Action> {
        let interval = self.config.move_interval.as_secs_f64();
        let GestureState::Dragging(gesture) = &mut self.state else {
            return None;
        };

        if let Some(last_emit) = gesture.last_emit {
            if now - last_emit < interval {
                trace!("Gesture {} move throttled", gesture.id);
                return None;
            }
        }

        gesture.last_emit = Some(now);
        gesture.push_point(position);
        Some(Action::SetPreviewCanvasItem(gesture.payload(position)))
    }

    /// Finish the live gesture at `position`.
    ///
    /// Emits the final `AddOrModifyCanvasItem` followed by
    /// `UnsetPreviewCanvasItem`. Without a live gesture nothing is emitted.
    pub fn pointer_up(&mut self, position: Pos2) -> Vec<Action> {
        let GestureState::Dragging(mut gesture) = std::mem::take(&mut self.state) else {
            return Vec::new();
        };

        gesture.push_point(position);
        debug!("Gesture {} finished at {position:?}", gesture.id);
        vec![
            Action::AddOrModifyCanvasItem(gesture.payload(position)),
            Action::UnsetPreviewCanvasItem,
        ]
    }

    /// Abandon the live gesture without committing it
    pub fn cancel(&mut self) -> Option<Action> {
        match std::mem::take(&mut self.state) {
            GestureState::Dragging(gesture) => {
                debug!("Gesture {} cancelled", gesture.id);
                Some(Action::UnsetPreviewCanvasItem)
            }
            GestureState::Idle => None,
        }
    }

    /// Route one input event through the state machine
    pub fn handle_event(&mut self, event: &InputEvent, tool: Option<Tool>, now: f64) -> Vec<Action> {
        match event {
            InputEvent::PointerDown {
                location,
                button: PointerButton::Primary,
            } if location.is_in_canvas => {
                if let Err(err) = self.pointer_down(location.position, tool) {
                    debug!("{err}");
                }
                Vec::new()
            }
            InputEvent::PointerMove { location } => {
                self.pointer_move(location.position, now).into_iter().collect()
            }
            InputEvent::PointerUp {
                location,
                button: PointerButton::Primary,
            } => self.pointer_up(location.position),
            InputEvent::Cancel => self.cancel().into_iter().collect(),
            _ => Vec::new(),
        }
    }
}
