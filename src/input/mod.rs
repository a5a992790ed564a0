use egui::{Context, LayerId, PointerButton, Pos2, Rect};

mod gestures;

pub use gestures::{ActiveGesture, GestureConfig, GestureController, GestureState};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in canvas coordinates (relative to the canvas' top-left)
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer input relevant to the canvas, in the order it happened
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed (or a first touch began)
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Pointer moved, with or without buttons held
    PointerMove { location: InputLocation },
    /// Mouse button was released, anywhere in the window
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// The window lost focus mid-interaction
    Cancel,
}

/// Handles converting raw egui input into canvas InputEvents
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    /// Layer the canvas is painted on; `None` until the first frame
    canvas_layer: Option<LayerId>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            canvas_layer: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn set_canvas_layer(&mut self, layer: LayerId) {
        self.canvas_layer = Some(layer);
    }

    /// Creates an InputLocation from a screen position.
    ///
    /// `top_layer` is the interactable layer drawn topmost at `pos`, if any.
    /// A position covered by a window or popup is not in the canvas.
    pub fn make_location(&self, pos: Pos2, top_layer: Option<LayerId>) -> InputLocation {
        let uncovered = match top_layer {
            Some(layer) => self.canvas_layer == Some(layer),
            None => true,
        };
        InputLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: uncovered && self.canvas_rect.contains(pos),
        }
    }

    /// Translate one raw egui event, if it matters to the canvas
    pub fn translate_event(
        &self,
        event: &egui::Event,
        layer_at: impl Fn(Pos2) -> Option<LayerId>,
    ) -> Option<InputEvent> {
        match event {
            egui::Event::PointerMoved(pos) => Some(InputEvent::PointerMove {
                location: self.make_location(*pos, layer_at(*pos)),
            }),
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                let location = self.make_location(*pos, layer_at(*pos));
                Some(if *pressed {
                    InputEvent::PointerDown {
                        location,
                        button: *button,
                    }
                } else {
                    InputEvent::PointerUp {
                        location,
                        button: *button,
                    }
                })
            }
            egui::Event::WindowFocused(false) => Some(InputEvent::Cancel),
            _ => None,
        }
    }

    /// Process this frame's raw egui input and generate InputEvents in order
    pub fn process_input(&self, ctx: &Context) -> Vec<InputEvent> {
        let events = ctx.input(|input| input.events.clone());
        events
            .iter()
            .filter_map(|event| self.translate_event(event, |pos| ctx.layer_id_at(pos)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Id, Modifiers, Order, pos2, vec2};

    fn press(pos: Pos2) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_locations_are_canvas_relative() {
        let handler = InputHandler::new(Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 200.0)));

        let inside = handler.make_location(pos2(110.0, 60.0), None);
        assert_eq!(inside.position, pos2(10.0, 10.0));
        assert!(inside.is_in_canvas);

        let outside = handler.make_location(pos2(20.0, 20.0), None);
        assert_eq!(outside.position, pos2(-80.0, -30.0));
        assert!(!outside.is_in_canvas);
    }

    #[test]
    fn test_translate_pointer_events() {
        let handler = InputHandler::new(Rect::from_min_size(Pos2::ZERO, vec2(100.0, 100.0)));
        let nothing_above = |_: Pos2| None;

        let down = handler.translate_event(&press(pos2(5.0, 5.0)), nothing_above);
        assert!(matches!(down, Some(InputEvent::PointerDown { button: PointerButton::Primary, .. })));

        let up = handler.translate_event(
            &egui::Event::PointerButton {
                pos: pos2(500.0, 5.0),
                button: PointerButton::Primary,
                pressed: false,
                modifiers: Modifiers::NONE,
            },
            nothing_above,
        );
        match up {
            Some(InputEvent::PointerUp { location, .. }) => assert!(!location.is_in_canvas),
            other => panic!("expected pointer up, got {other:?}"),
        }

        assert_eq!(
            handler.translate_event(&egui::Event::WindowFocused(false), nothing_above),
            Some(InputEvent::Cancel)
        );
        assert_eq!(handler.translate_event(&egui::Event::PointerGone, nothing_above), None);
    }

    #[test]
    fn test_press_under_overlay_is_not_in_canvas() {
        let mut handler = InputHandler::new(Rect::from_min_size(Pos2::ZERO, vec2(500.0, 500.0)));
        let canvas = LayerId::background();
        handler.set_canvas_layer(canvas);
        let picker = LayerId::new(Order::Foreground, Id::new("color_picker"));

        let covered = |pos: Pos2| {
            Rect::from_min_max(pos2(200.0, 200.0), pos2(400.0, 400.0))
                .contains(pos)
                .then_some(picker)
        };

        let Some(InputEvent::PointerDown { location, .. }) = handler.translate_event(&press(pos2(300.0, 300.0)), covered)
        else {
            panic!("expected pointer down");
        };
        assert!(!location.is_in_canvas);

        let Some(InputEvent::PointerDown { location, .. }) = handler.translate_event(&press(pos2(50.0, 50.0)), covered)
        else {
            panic!("expected pointer down");
        };
        assert!(location.is_in_canvas);

        assert!(handler.make_location(pos2(300.0, 300.0), Some(canvas)).is_in_canvas);
    }
}
