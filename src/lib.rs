#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod state;
pub mod surface;
pub mod tools;
pub mod util;

pub use action::{Action, Dispatcher, DragPayload};
pub use app::CanvasApp;
pub use element::{CanvasItem, CanvasItemId, ItemPatch, Shape};
pub use error::{CanvasError, CanvasResult};
pub use input::{GestureConfig, GestureController, InputEvent, InputLocation};
pub use renderer::{draw_canvas, render_item};
pub use settings::CanvasSettings;
pub use state::{AppState, LatestSnapshot, Snapshot, Store, reduce};
pub use surface::{PainterSurface, RecordingSurface, Surface};
pub use tools::Tool;
