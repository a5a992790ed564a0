use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use egui::{Color32, pos2};
use layered_canvas::{Action, AppState, CanvasError, DragPayload, Snapshot, Store, Tool};

#[test]
fn test_actions_fold_in_dispatch_order() {
    let mut store = Store::default();
    let dispatcher = store.dispatcher();

    dispatcher.update_current_action(Some(Tool::Circle)).unwrap();
    dispatcher
        .add_or_modify_canvas_item(DragPayload::new(1, pos2(0.0, 0.0), pos2(3.0, 4.0)))
        .unwrap();
    dispatcher.update_current_action_from_input("rectangle").unwrap();
    dispatcher
        .add_or_modify_canvas_item(DragPayload::new(2, pos2(1.0, 1.0), pos2(2.0, 2.0)))
        .unwrap();

    assert_eq!(store.process_pending(), 4);
    assert_eq!(store.version(), 4);

    let kinds: Vec<_> = store
        .state()
        .current_canvas_item_list
        .iter()
        .map(|item| item.shape.kind_name())
        .collect();
    assert_eq!(kinds, vec!["circle", "rectangle"]);
    assert_eq!(store.state().selected_canvas_item_id, Some(2));
}

#[test]
fn test_subscriber_sees_current_then_every_snapshot() {
    let mut store = Store::default();
    let seen: Rc<RefCell<Vec<u64>>> = Rc::default();

    let sink = Rc::clone(&seen);
    store.subscribe(Box::new(move |snapshot: &Snapshot| sink.borrow_mut().push(snapshot.version)));
    assert_eq!(*seen.borrow(), vec![0]);

    let dispatcher = store.dispatcher();
    dispatcher.update_current_action_fill(Color32::RED).unwrap();
    dispatcher.unset_preview_canvas_item().unwrap();
    store.process_pending();

    // No-op transitions are still published
    assert_eq!(*seen.borrow(), vec![0, 1, 2]);
}

#[test]
fn test_noop_snapshot_shares_state() {
    let mut store = Store::default();
    let before = Arc::clone(store.state());

    store.apply(&Action::RemoveCanvasItem(12));
    assert!(Arc::ptr_eq(&before, store.state()));
    assert_eq!(store.version(), 1);
}

#[test]
fn test_latest_snapshot_tracks_newest() {
    let mut store = Store::new(AppState {
        current_action: None,
        ..AppState::default()
    });
    let latest = store.latest();
    assert_eq!(latest.version(), 0);

    let dispatcher = store.dispatcher();
    dispatcher.update_current_action_from_input("Brush").unwrap();
    dispatcher.update_current_action_line_width(6.0).unwrap();
    store.process_pending();

    let snapshot = latest.get();
    assert_eq!(snapshot.version, 2);
    assert_eq!(snapshot.state.current_action, Some(Tool::Brush));
    assert_eq!(snapshot.state.current_action_line_width, 6.0);
}

#[test]
fn test_unknown_tool_label_disarms() {
    let mut store = Store::default();
    store.dispatcher().update_current_action_from_input("lasso").unwrap();
    store.process_pending();
    assert_eq!(store.state().current_action, None);
}

#[test]
fn test_dispatch_after_store_dropped() {
    let store = Store::default();
    let dispatcher = store.dispatcher();
    drop(store);

    assert_eq!(dispatcher.remove_selected_canvas_item(), Err(CanvasError::StoreClosed));
}

#[test]
fn test_process_pending_when_empty() {
    let mut store = Store::default();
    assert_eq!(store.process_pending(), 0);
    assert_eq!(store.version(), 0);
}
