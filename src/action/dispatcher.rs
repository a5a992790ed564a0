use egui::Color32;
use futures::channel::mpsc::UnboundedSender;
use log::{trace, warn};

use super::{Action, DragPayload};
use crate::element::{CanvasItemId, ItemPatch};
use crate::error::{CanvasError, CanvasResult};
use crate::tools::Tool;

/// Entry points for pushing actions onto the store's action stream.
///
/// Cheap to clone; every clone feeds the same ordered stream.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    sender: UnboundedSender<Action>,
}

impl Dispatcher {
    pub(crate) fn new(sender: UnboundedSender<Action>) -> Self {
        Self { sender }
    }

    /// Push a tagged action onto the stream
    pub fn dispatch(&self, action: Action) -> CanvasResult<()> {
        trace!("Dispatching {}", action.tag());
        self.sender
            .unbounded_send(action)
            .map_err(|_| CanvasError::StoreClosed)
    }

    /// Push every action in order, stopping at the first failure
    pub fn dispatch_all(&self, actions: impl IntoIterator<Item = Action>) -> CanvasResult<()> {
        actions.into_iter().try_for_each(|action| self.dispatch(action))
    }

    pub fn add_or_modify_canvas_item(&self, payload: DragPayload) -> CanvasResult<()> {
        self.dispatch(Action::AddOrModifyCanvasItem(payload))
    }

    pub fn highlight_canvas_item(&self, id: CanvasItemId) -> CanvasResult<()> {
        self.dispatch(Action::HighlightCanvasItem(id))
    }

    pub fn modify_canvas_item(&self, id: CanvasItemId, patch: ItemPatch) -> CanvasResult<()> {
        self.dispatch(Action::ModifyCanvasItem { id, patch })
    }

    pub fn copy_canvas_item(&self, id: CanvasItemId, new_id: CanvasItemId) -> CanvasResult<()> {
        self.dispatch(Action::CopyCanvasItem { id, new_id })
    }

    pub fn remove_canvas_item(&self, id: CanvasItemId) -> CanvasResult<()> {
        self.dispatch(Action::RemoveCanvasItem(id))
    }

    pub fn remove_selected_canvas_item(&self) -> CanvasResult<()> {
        self.dispatch(Action::RemoveSelectedCanvasItem)
    }

    pub fn set_preview_canvas_item(&self, payload: DragPayload) -> CanvasResult<()> {
        self.dispatch(Action::SetPreviewCanvasItem(payload))
    }

    /// Select an item by id. Only the id is stored, never a copy of the item.
    pub fn set_selected_canvas_item(&self, id: Option<CanvasItemId>) -> CanvasResult<()> {
        self.dispatch(Action::SetSelectedCanvasItem(id))
    }

    pub fn unset_preview_canvas_item(&self) -> CanvasResult<()> {
        self.dispatch(Action::UnsetPreviewCanvasItem)
    }

    pub fn update_current_action(&self, tool: Option<Tool>) -> CanvasResult<()> {
        self.dispatch(Action::UpdateCurrentAction(tool))
    }

    /// Arm the tool named by an input label. An unknown label disarms the
    /// current tool.
    pub fn update_current_action_from_input(&self, label: &str) -> CanvasResult<()> {
        let tool = match label.parse::<Tool>() {
            Ok(tool) => Some(tool),
            Err(err) => {
                warn!("{err}, disarming current tool");
                None
            }
        };
        self.update_current_action(tool)
    }

    pub fn update_current_action_fill(&self, color: Color32) -> CanvasResult<()> {
        self.dispatch(Action::UpdateCurrentActionFill(color))
    }

    pub fn update_current_action_line(&self, color: Color32) -> CanvasResult<()> {
        self.dispatch(Action::UpdateCurrentActionLine(color))
    }

    pub fn update_current_action_line_width(&self, width: f32) -> CanvasResult<()> {
        self.dispatch(Action::UpdateCurrentActionLineWidth(width))
    }
}
