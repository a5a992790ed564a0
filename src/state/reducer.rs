//! The canvas state machine's transition table.
//!
//! `reduce` is pure and total: it never mutates its input and never fails.
//! Transitions that change nothing hand back the same `Arc`, so subscribers
//! can tell a no-op from an update with `Arc::ptr_eq`.

use std::sync::Arc;

use log::{debug, warn};

use super::AppState;
use crate::action::{Action, DragPayload};
use crate::element::{CanvasItem, CanvasItemId, ItemPatch, factory};
use crate::tools::Tool;

/// Fold one action into the state, producing the next snapshot
pub fn reduce(state: &Arc<AppState>, action: &Action) -> Arc<AppState> {
    match action {
        Action::AddOrModifyCanvasItem(payload) => add_or_modify_canvas_item(state, payload),
        Action::HighlightCanvasItem(id) => highlight_canvas_item(state, *id),
        Action::ModifyCanvasItem { id, patch } => modify_canvas_item(state, *id, patch),
        Action::CopyCanvasItem { id, new_id } => copy_canvas_item(state, *id, *new_id),
        Action::RemoveCanvasItem(id) => remove_canvas_item(state, *id),
        Action::RemoveSelectedCanvasItem => match state.selected_canvas_item_id {
            Some(id) => remove_canvas_item(state, id),
            None => Arc::clone(state),
        },
        Action::SetPreviewCanvasItem(payload) => {
            let preview_canvas_item_list = derive_canvas_item(state, payload).into_iter().collect();
            update(state, |next| next.preview_canvas_item_list = preview_canvas_item_list)
        }
        Action::SetSelectedCanvasItem(id) => update(state, |next| next.selected_canvas_item_id = *id),
        Action::UnsetPreviewCanvasItem => {
            if state.preview_canvas_item_list.is_empty() {
                return Arc::clone(state);
            }
            update(state, |next| next.preview_canvas_item_list.clear())
        }
        Action::UpdateCurrentAction(tool) => update(state, |next| next.current_action = *tool),
        Action::UpdateCurrentActionFill(color) => {
            update(state, |next| next.current_action_fill_color = *color)
        }
        Action::UpdateCurrentActionLine(color) => {
            update(state, |next| next.current_action_line_color = *color)
        }
        Action::UpdateCurrentActionLineWidth(width) => {
            update(state, |next| next.current_action_line_width = *width)
        }
    }
}

/// Copy the state, apply `change` to the copy, and wrap it as a new snapshot
fn update(state: &AppState, change: impl FnOnce(&mut AppState)) -> Arc<AppState> {
    let mut next = state.clone();
    change(&mut next);
    Arc::new(next)
}

/// Build the item a drag payload stands for under the current tool.
///
/// Creation tools produce a fresh item; `Move` and `Rotate` produce an updated
/// copy of the selected item. `None` when there is nothing to derive.
fn derive_canvas_item(state: &AppState, payload: &DragPayload) -> Option<CanvasItem> {
    let tool = state.current_action?;
    if tool.creates_item() {
        return factory::create_from_drag(tool, payload, &state.pending_style());
    }

    let Some(selected) = state.selected_item() else {
        debug!("{tool} gesture with no selected item, ignoring");
        return None;
    };

    let delta = payload.delta();
    match tool {
        Tool::Move => Some(selected.translated(delta)),
        // Rotation follows the drag distance along both axes, not the angle
        // around the pivot.
        Tool::Rotate => Some(selected.rotated(delta.x + delta.y)),
        _ => None,
    }
}

fn add_or_modify_canvas_item(state: &Arc<AppState>, payload: &DragPayload) -> Arc<AppState> {
    let Some(tool) = state.current_action else {
        return Arc::clone(state);
    };
    let Some(item) = derive_canvas_item(state, payload) else {
        return Arc::clone(state);
    };

    if tool.creates_item() {
        if state.contains_item(item.id) {
            warn!("Canvas item {} already exists, not adding it twice", item.id);
            return Arc::clone(state);
        }
        debug!("Adding {} item {}", item.shape.kind_name(), item.id);
        update(state, |next| {
            next.selected_canvas_item_id = Some(item.id);
            next.current_canvas_item_list.push(item);
        })
    } else {
        update(state, |next| replace_item(&mut next.current_canvas_item_list, item))
    }
}

/// Splice `item` over the entry with the same id, keeping list order
fn replace_item(items: &mut [CanvasItem], item: CanvasItem) {
    if let Some(slot) = items.iter_mut().find(|existing| existing.id == item.id) {
        *slot = item;
    }
}

fn highlight_canvas_item(state: &Arc<AppState>, id: CanvasItemId) -> Arc<AppState> {
    match state.find_item(id) {
        Some(item) => {
            let highlight = item.highlighted(crate::element::HIGHLIGHT_COLOR);
            update(state, |next| next.preview_canvas_item_list = vec![highlight])
        }
        None => {
            debug!("Cannot highlight unknown canvas item {id}, clearing preview");
            if state.preview_canvas_item_list.is_empty() {
                return Arc::clone(state);
            }
            update(state, |next| next.preview_canvas_item_list.clear())
        }
    }
}

fn modify_canvas_item(state: &Arc<AppState>, id: CanvasItemId, patch: &ItemPatch) -> Arc<AppState> {
    let Some(item) = state.find_item(id) else {
        debug!("Cannot modify unknown canvas item {id}");
        return Arc::clone(state);
    };
    if patch.is_empty() {
        return Arc::clone(state);
    }

    let patched = item.patched(patch);
    update(state, |next| replace_item(&mut next.current_canvas_item_list, patched))
}

fn copy_canvas_item(state: &Arc<AppState>, id: CanvasItemId, new_id: CanvasItemId) -> Arc<AppState> {
    let Some(item) = state.find_item(id) else {
        debug!("Cannot copy unknown canvas item {id}");
        return Arc::clone(state);
    };
    if state.contains_item(new_id) {
        warn!("Canvas item {new_id} already exists, not copying {id} onto it");
        return Arc::clone(state);
    }

    let copy = item.with_id(new_id);
    update(state, |next| {
        next.current_canvas_item_list.push(copy);
        next.selected_canvas_item_id = Some(new_id);
    })
}

fn remove_canvas_item(state: &Arc<AppState>, id: CanvasItemId) -> Arc<AppState> {
    let removes_selection = state.selected_canvas_item_id == Some(id);
    if !removes_selection && !state.contains_item(id) {
        return Arc::clone(state);
    }

    update(state, |next| {
        next.current_canvas_item_list.retain(|item| item.id != id);
        if removes_selection {
            next.selected_canvas_item_id = next.current_canvas_item_list.last().map(|item| item.id);
        }
    })
}
