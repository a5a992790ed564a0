use std::sync::Arc;

use egui::{LayerId, Painter, Rect};
use log::{error, info, trace};

use crate::action::Dispatcher;
use crate::element::CanvasItemId;
use crate::error::CanvasResult;
use crate::input::{GestureConfig, GestureController, InputHandler};
use crate::panels::{central_panel, layers_panel, tools_panel};
use crate::renderer::draw_canvas;
use crate::settings::{CanvasSettings, SETTINGS_KEY};
use crate::state::{AppState, LatestSnapshot, Snapshot, Store};
use crate::surface::PainterSurface;
use crate::util::time::monotonic_secs;

/// The eframe application hosting the canvas.
///
/// Panels and input only dispatch actions; the store folds them once per
/// frame and the canvas is drawn from the latest snapshot.
pub struct CanvasApp {
    settings: CanvasSettings,
    store: Store,
    dispatcher: Dispatcher,
    latest: LatestSnapshot,
    gestures: GestureController,
    input: InputHandler,
    hovered_layer: Option<CanvasItemId>,
    show_debug: bool,
}

impl Default for CanvasApp {
    fn default() -> Self {
        Self::with_settings(CanvasSettings::default())
    }
}

impl CanvasApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<CanvasSettings>(storage, SETTINGS_KEY))
            .unwrap_or_default();
        info!("Starting with tool {:?}", settings.tool);

        Self::with_settings(settings)
    }

    pub fn with_settings(settings: CanvasSettings) -> Self {
        let mut store = Store::new(AppState::from_settings(&settings));
        store.subscribe(Box::new(|snapshot: &Snapshot| {
            trace!(
                "Snapshot {} with {} items",
                snapshot.version,
                snapshot.state.current_canvas_item_list.len()
            );
        }));

        Self {
            gestures: GestureController::new(GestureConfig {
                move_interval: settings.move_throttle(),
            }),
            dispatcher: store.dispatcher(),
            latest: store.latest(),
            store,
            input: InputHandler::new(Rect::NOTHING),
            hovered_layer: None,
            show_debug: false,
            settings,
        }
    }

    /// Newest published state
    pub fn state(&self) -> Arc<AppState> {
        self.latest.get().state
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Fresh id for an item created outside a gesture
    pub fn allocate_id(&mut self) -> CanvasItemId {
        self.gestures.allocate_id()
    }

    pub(crate) fn show_debug_mut(&mut self) -> &mut bool {
        &mut self.show_debug
    }

    /// Log a failed dispatch
    pub(crate) fn report(&self, result: CanvasResult<()>) {
        if let Err(err) = result {
            error!("Dispatch failed: {err}");
        }
    }

    /// Highlight the layer under the pointer, clearing it once the pointer leaves.
    ///
    /// A live gesture owns the preview, so hover changes wait until it ends.
    pub(crate) fn sync_hover(&mut self, hovered: Option<CanvasItemId>) {
        if hovered == self.hovered_layer || self.gestures.is_dragging() {
            return;
        }
        self.hovered_layer = hovered;

        let result = match hovered {
            Some(id) => self.dispatcher.highlight_canvas_item(id),
            None => self.dispatcher.unset_preview_canvas_item(),
        };
        self.report(result);
    }

    /// Feed this frame's pointer input through the gesture controller and fold
    /// everything dispatched so far
    pub(crate) fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas_rect: Rect, canvas_layer: LayerId) {
        // Tool changes from the panels must land before a gesture reads them
        self.store.process_pending();

        self.input.set_canvas_rect(canvas_rect);
        self.input.set_canvas_layer(canvas_layer);
        let tool = self.store.state().current_action;
        let now = monotonic_secs();
        for event in self.input.process_input(ctx) {
            let actions = self.gestures.handle_event(&event, tool, now);
            self.report(self.dispatcher.dispatch_all(actions));
        }

        if !ctx.wants_keyboard_input() && ctx.input(|input| input.key_pressed(egui::Key::Delete)) {
            self.report(self.dispatcher.remove_selected_canvas_item());
        }

        self.store.process_pending();

        if self.gestures.is_dragging() {
            ctx.request_repaint();
        }
    }

    /// Draw the persisted items, then the preview on top
    pub(crate) fn paint(&self, painter: &Painter, canvas_rect: Rect) {
        let snapshot = self.latest.get();
        let state = &snapshot.state;

        let mut canvas = PainterSurface::new(painter, canvas_rect).with_background(self.settings.background_color);
        draw_canvas(&mut canvas, &state.current_canvas_item_list);

        let mut preview = PainterSurface::new(painter, canvas_rect);
        draw_canvas(&mut preview, state.preview_canvas_item_list.first());
    }

    fn debug_window(&mut self, ctx: &egui::Context) {
        let snapshot = self.latest.get();
        egui::Window::new("Canvas Debug")
            .open(&mut self.show_debug)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.label(format!("Version: {}", snapshot.version));
                ui.label(format!("Items: {}", snapshot.state.current_canvas_item_list.len()));
                ui.label(format!("Gesture: {:?}", self.gestures.state().active_gesture().map(|g| g.id)));
                ui.separator();

                let json = serde_json::to_string_pretty(&*snapshot.state).unwrap_or_else(|err| err.to_string());
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.monospace(json);
                });
            });
    }
}

impl eframe::App for CanvasApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings.capture(self.store.state());
        eframe::set_value(storage, SETTINGS_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);

        let hovered = layers_panel(self, ctx);
        self.sync_hover(hovered);

        central_panel(self, ctx);

        self.debug_window(ctx);
    }
}
