use egui::Color32;

use crate::command::DrawCommand;
use crate::geometry::Point;

mod recording;
mod shapes;

pub use recording::{DrawOp, RecordingCanvas};
pub use shapes::ShapeCanvas;

/// How the ends of a stroked path are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Stateful 2D drawing primitives that draw commands render through.
///
/// Style state (colors, width, cap) persists on the context until changed,
/// so every command sets the style it needs before drawing.
pub trait DrawingContext {
    fn set_stroke_color(&mut self, color: Color32);
    fn set_fill_color(&mut self, color: Color32);
    fn set_line_width(&mut self, width: f32);
    fn set_line_cap(&mut self, cap: LineCap);

    /// Start a new subpath at `to`
    fn move_to(&mut self, to: Point);
    fn line_to(&mut self, to: Point);
    fn quad_curve_to(&mut self, control: Point, to: Point);

    /// Stroke the current path with the current style, then discard it
    fn stroke_path(&mut self);

    /// Fill a circle with the current fill color
    fn fill_circle(&mut self, center: Point, radius: f32);
}

/// The replay target for draw commands.
///
/// Used both for live drawing while a stroke is captured and for redrawing
/// the whole history after an undo.
pub trait Canvas {
    /// Drawing context that commands render into
    fn context(&mut self) -> &mut dyn DrawingContext;

    /// Clear the canvas to a blank state
    fn reset(&mut self);

    /// Render each command in order on top of the current canvas state
    fn execute_commands(&mut self, commands: &[DrawCommand]) {
        let context = self.context();
        for command in commands {
            command.execute(context);
        }
    }
}
