#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod settings;
pub mod width;

pub use app::FreehandApp;
pub use canvas::{Canvas, DrawingContext, LineCap, RecordingCanvas, ShapeCanvas};
pub use command::{CircleDrawCommand, CommandHistory, ComposedCommand, DrawCommand, LineDrawCommand};
pub use controller::FreehandDrawController;
pub use error::SettingsError;
pub use geometry::{Point, Segment, Velocity};
pub use input::{DragPhase, GestureEvent, PointerGestures};
pub use settings::DrawSettings;
pub use width::modulated_width;
