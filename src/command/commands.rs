use egui::Color32;

use crate::canvas::{DrawingContext, LineCap};
use crate::geometry::{Point, Segment};

/// One sampled slice of a stroke.
///
/// With a `previous` segment the slice is drawn as a quadratic curve that
/// joins smoothly with the slice before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDrawCommand {
    pub current: Segment,
    pub previous: Option<Segment>,
    pub width: f32,
    pub color: Color32,
}

impl LineDrawCommand {
    pub fn new(current: Segment, previous: Option<Segment>, width: f32, color: Color32) -> Self {
        Self {
            current,
            previous,
            width,
            color,
        }
    }

    fn configure(&self, context: &mut dyn DrawingContext) {
        context.set_stroke_color(self.color);
        context.set_line_width(self.width);
        context.set_line_cap(LineCap::Round);
    }

    pub fn execute(&self, context: &mut dyn DrawingContext) {
        self.configure(context);

        match self.previous {
            Some(previous) => {
                context.move_to(previous.midpoint());
                context.quad_curve_to(self.current.midpoint(), self.current.a);
            }
            None => {
                context.move_to(self.current.a);
                context.line_to(self.current.b);
            }
        }
        context.stroke_path();
    }
}

/// A dot left by a tap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleDrawCommand {
    pub center: Point,
    pub radius: f32,
    pub color: Color32,
}

impl CircleDrawCommand {
    pub fn new(center: Point, radius: f32, color: Color32) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn execute(&self, context: &mut dyn DrawingContext) {
        context.set_fill_color(self.color);
        context.fill_circle(self.center, self.radius);
    }
}

/// Ordered group of commands that is undone as a single unit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposedCommand {
    commands: Vec<DrawCommand>,
}

impl ComposedCommand {
    pub fn new(commands: Vec<DrawCommand>) -> Self {
        Self { commands }
    }

    pub fn add_command(&mut self, command: impl Into<DrawCommand>) {
        self.commands.push(command.into());
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn execute(&self, context: &mut dyn DrawingContext) {
        for command in &self.commands {
            command.execute(context);
        }
    }
}

/// A self-describing unit of rendering work.
///
/// Executing a command sets every piece of style state it relies on, so the
/// result never depends on what ran before it. Replaying a list of commands
/// on a blank canvas therefore always reproduces the same picture.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line(LineDrawCommand),
    Circle(CircleDrawCommand),
    Composed(ComposedCommand),
}

impl DrawCommand {
    pub fn execute(&self, context: &mut dyn DrawingContext) {
        match self {
            DrawCommand::Line(line) => line.execute(context),
            DrawCommand::Circle(circle) => circle.execute(context),
            DrawCommand::Composed(composed) => composed.execute(context),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DrawCommand::Line(_) => "line",
            DrawCommand::Circle(_) => "circle",
            DrawCommand::Composed(_) => "composed",
        }
    }
}

impl From<LineDrawCommand> for DrawCommand {
    fn from(command: LineDrawCommand) -> Self {
        DrawCommand::Line(command)
    }
}

impl From<CircleDrawCommand> for DrawCommand {
    fn from(command: CircleDrawCommand) -> Self {
        DrawCommand::Circle(command)
    }
}

impl From<ComposedCommand> for DrawCommand {
    fn from(command: ComposedCommand) -> Self {
        DrawCommand::Composed(command)
    }
}
