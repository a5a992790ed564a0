use std::time::Duration;

use egui::{PointerButton, Pos2, Vec2, pos2, vec2};
use layered_canvas::{Action, CanvasError, GestureConfig, GestureController, InputEvent, InputLocation, Store, Tool};

fn at(x: f32, y: f32) -> InputLocation {
    InputLocation {
        position: pos2(x, y),
        is_in_canvas: (0.0..=500.0).contains(&x) && (0.0..=500.0).contains(&y),
    }
}

fn down(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerDown {
        location: at(x, y),
        button: PointerButton::Primary,
    }
}

fn moved(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove { location: at(x, y) }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp {
        location: at(x, y),
        button: PointerButton::Primary,
    }
}

fn controller() -> GestureController {
    GestureController::new(GestureConfig {
        move_interval: Duration::from_millis(16),
    })
}

#[test]
fn test_full_gesture_emits_preview_then_commit() {
    let mut gestures = controller();
    let tool = Some(Tool::Rectangle);

    assert!(gestures.handle_event(&down(10.0, 10.0), tool, 0.0).is_empty());
    assert!(gestures.is_dragging());

    let preview = gestures.handle_event(&moved(20.0, 15.0), tool, 0.1);
    let [Action::SetPreviewCanvasItem(payload)] = preview.as_slice() else {
        panic!("expected a preview, got {preview:?}");
    };
    assert_eq!(payload.start, pos2(10.0, 10.0));
    assert_eq!(payload.end, pos2(20.0, 15.0));
    assert_eq!(payload.path, None);

    let finish = gestures.handle_event(&up(30.0, 40.0), tool, 0.2);
    assert_eq!(finish.len(), 2);
    match &finish[0] {
        Action::AddOrModifyCanvasItem(last) => {
            assert_eq!(last.id, payload.id);
            assert_eq!(last.end, pos2(30.0, 40.0));
        }
        other => panic!("expected a commit, got {other:?}"),
    }
    assert_eq!(finish[1], Action::UnsetPreviewCanvasItem);
    assert!(gestures.state().is_idle());
}

#[test]
fn test_nothing_emitted_after_gesture_ends() {
    let mut gestures = controller();
    let tool = Some(Tool::Line);

    gestures.handle_event(&down(0.0, 0.0), tool, 0.0);
    gestures.handle_event(&up(5.0, 5.0), tool, 0.1);

    assert!(gestures.handle_event(&moved(6.0, 6.0), tool, 1.0).is_empty());
    assert!(gestures.handle_event(&up(7.0, 7.0), tool, 1.1).is_empty());
}

#[test]
fn test_up_outside_canvas_still_ends_gesture() {
    let mut gestures = controller();
    let tool = Some(Tool::Circle);

    gestures.handle_event(&down(490.0, 490.0), tool, 0.0);
    let finish = gestures.handle_event(&up(800.0, 490.0), tool, 0.1);
    assert_eq!(finish.len(), 2);
    assert!(gestures.state().is_idle());
}

#[test]
fn test_secondary_button_does_not_start() {
    let mut gestures = controller();
    let event = InputEvent::PointerDown {
        location: at(5.0, 5.0),
        button: PointerButton::Secondary,
    };
    assert!(gestures.handle_event(&event, Some(Tool::Rectangle), 0.0).is_empty());
    assert!(gestures.state().is_idle());
}

#[test]
fn test_second_down_keeps_live_gesture() {
    let mut gestures = controller();
    let first = gestures.pointer_down(pos2(1.0, 1.0), Some(Tool::Line)).unwrap();
    let second = gestures.pointer_down(pos2(9.0, 9.0), Some(Tool::Line)).unwrap();
    assert_eq!(first, second);
    assert_eq!(gestures.state().active_gesture().map(|g| g.start), Some(pos2(1.0, 1.0)));
}

#[test]
fn test_pointer_down_without_tool() {
    let mut gestures = controller();
    assert_eq!(gestures.pointer_down(Pos2::ZERO, None), Err(CanvasError::NoActiveTool));
    assert!(gestures.handle_event(&down(1.0, 1.0), None, 0.0).is_empty());
    assert!(gestures.state().is_idle());
}

#[test]
fn test_brush_path_accumulates_and_appends_end() {
    let mut gestures = controller();
    let tool = Some(Tool::Brush);

    gestures.handle_event(&down(100.0, 100.0), tool, 0.0);
    gestures.handle_event(&moved(102.0, 101.0), tool, 0.00);
    // Throttled: too soon after the previous emission, so not recorded
    gestures.handle_event(&moved(103.0, 103.0), tool, 0.01);
    gestures.handle_event(&moved(105.0, 104.0), tool, 0.05);

    let finish = gestures.handle_event(&up(110.0, 110.0), tool, 0.06);
    let Action::AddOrModifyCanvasItem(payload) = &finish[0] else {
        panic!("expected a commit, got {finish:?}");
    };
    assert_eq!(
        payload.path,
        Some(vec![Vec2::ZERO, vec2(2.0, 1.0), vec2(5.0, 4.0), vec2(10.0, 10.0)])
    );
}

#[test]
fn test_end_point_not_duplicated() {
    let mut gestures = controller();
    let tool = Some(Tool::Polygon);

    gestures.handle_event(&down(0.0, 0.0), tool, 0.0);
    gestures.handle_event(&moved(4.0, 4.0), tool, 0.0);
    let finish = gestures.handle_event(&up(4.0, 4.0), tool, 0.1);

    let Action::AddOrModifyCanvasItem(payload) = &finish[0] else {
        panic!("expected a commit, got {finish:?}");
    };
    assert_eq!(payload.path, Some(vec![Vec2::ZERO, vec2(4.0, 4.0)]));
}

#[test]
fn test_cancel_unsets_preview() {
    let mut gestures = controller();
    let tool = Some(Tool::Rectangle);

    gestures.handle_event(&down(0.0, 0.0), tool, 0.0);
    gestures.handle_event(&moved(4.0, 4.0), tool, 0.0);
    assert_eq!(
        gestures.handle_event(&InputEvent::Cancel, tool, 0.1),
        vec![Action::UnsetPreviewCanvasItem]
    );
    assert!(gestures.handle_event(&up(5.0, 5.0), tool, 0.2).is_empty());
}

#[test]
fn test_gesture_ids_are_unique() {
    let mut gestures = controller();
    let first = gestures.pointer_down(Pos2::ZERO, Some(Tool::Line)).unwrap();
    gestures.pointer_up(pos2(1.0, 1.0));
    let copy_id = gestures.allocate_id();
    let second = gestures.pointer_down(Pos2::ZERO, Some(Tool::Line)).unwrap();

    assert!(first < copy_id && copy_id < second);
}

#[test]
fn test_gestures_drive_store() {
    let mut store = Store::default();
    let dispatcher = store.dispatcher();
    let mut gestures = controller();
    let tool = store.state().current_action;

    for (event, now) in [(down(0.0, 0.0), 0.0), (moved(1.0, 1.0), 0.0), (up(2.0, 2.0), 0.1)] {
        dispatcher.dispatch_all(gestures.handle_event(&event, tool, now)).unwrap();
    }
    store.process_pending();

    let state = store.state();
    assert_eq!(state.current_canvas_item_list.len(), 1);
    assert!(state.preview_canvas_item_list.is_empty());
    assert_eq!(state.selected_canvas_item_id, Some(state.current_canvas_item_list[0].id));
}
