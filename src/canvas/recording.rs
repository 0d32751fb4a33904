use egui::Color32;

use super::{Canvas, DrawingContext, LineCap};
use crate::geometry::Point;

/// One primitive call made against a [`RecordingCanvas`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    SetStrokeColor(Color32),
    SetFillColor(Color32),
    SetLineWidth(f32),
    SetLineCap(LineCap),
    MoveTo(Point),
    LineTo(Point),
    QuadCurveTo { control: Point, to: Point },
    StrokePath,
    FillCircle { center: Point, radius: f32 },
}

/// Canvas that keeps a log of primitive calls instead of pixels.
///
/// Two recording canvases that received the same ops since their last reset
/// show the same picture, which makes this the reference backend for
/// checking replay against live drawing.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
    resets: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ops recorded since the last reset
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of times the canvas was cleared
    pub fn resets(&self) -> usize {
        self.resets
    }

    pub fn is_blank(&self) -> bool {
        self.ops.is_empty()
    }

    fn record(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

impl DrawingContext for RecordingCanvas {
    fn set_stroke_color(&mut self, color: Color32) {
        self.record(DrawOp::SetStrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.record(DrawOp::SetFillColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.record(DrawOp::SetLineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.record(DrawOp::SetLineCap(cap));
    }

    fn move_to(&mut self, to: Point) {
        self.record(DrawOp::MoveTo(to));
    }

    fn line_to(&mut self, to: Point) {
        self.record(DrawOp::LineTo(to));
    }

    fn quad_curve_to(&mut self, control: Point, to: Point) {
        self.record(DrawOp::QuadCurveTo { control, to });
    }

    fn stroke_path(&mut self) {
        self.record(DrawOp::StrokePath);
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        self.record(DrawOp::FillCircle { center, radius });
    }
}

impl Canvas for RecordingCanvas {
    fn context(&mut self) -> &mut dyn DrawingContext {
        self
    }

    fn reset(&mut self) {
        self.ops.clear();
        self.resets += 1;
    }
}
