use egui::epaint::QuadraticBezierShape;
use egui::{Color32, Rect, Shape, Stroke, Vec2};

use super::{Canvas, DrawingContext, LineCap};
use crate::geometry::Point;

#[derive(Debug, Clone, Copy)]
enum PathPiece {
    Line(Point),
    Quad { control: Point, to: Point },
}

#[derive(Debug, Clone)]
struct SubPath {
    start: Point,
    pieces: Vec<PathPiece>,
}

impl SubPath {
    fn end(&self) -> Point {
        match self.pieces.last() {
            Some(PathPiece::Line(to)) | Some(PathPiece::Quad { to, .. }) => *to,
            None => self.start,
        }
    }
}

/// Canvas backed by a list of egui shapes.
///
/// Paths are tessellated by egui when the shapes are painted. Shapes are in
/// canvas-local coordinates; the host translates them into its paint rect.
#[derive(Debug, Clone)]
pub struct ShapeCanvas {
    shapes: Vec<Shape>,
    path: Vec<SubPath>,
    stroke_color: Color32,
    fill_color: Color32,
    line_width: f32,
    line_cap: LineCap,
}

impl Default for ShapeCanvas {
    fn default() -> Self {
        Self {
            shapes: Vec::new(),
            path: Vec::new(),
            stroke_color: Color32::BLACK,
            fill_color: Color32::BLACK,
            line_width: 1.0,
            line_cap: LineCap::Butt,
        }
    }
}

impl ShapeCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything painted since the last reset, in paint order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Copies of the shapes moved by `offset`, ready to hand to a painter
    pub fn shapes_translated(&self, offset: Vec2) -> Vec<Shape> {
        self.shapes
            .iter()
            .cloned()
            .map(|mut shape| {
                shape.translate(offset);
                shape
            })
            .collect()
    }

    fn current_subpath(&mut self, at: Point) -> &mut SubPath {
        if self.path.is_empty() {
            // Drawing without a move_to starts the subpath at the target
            self.path.push(SubPath {
                start: at,
                pieces: Vec::new(),
            });
        }
        let last = self.path.len() - 1;
        &mut self.path[last]
    }

    fn add_cap(&mut self, at: Point) {
        let half_width = self.line_width / 2.0;
        match self.line_cap {
            LineCap::Butt => {}
            LineCap::Round => {
                self.shapes
                    .push(Shape::circle_filled(at, half_width, self.stroke_color));
            }
            LineCap::Square => {
                self.shapes.push(Shape::rect_filled(
                    Rect::from_center_size(at, Vec2::splat(self.line_width)),
                    0.0,
                    self.stroke_color,
                ));
            }
        }
    }
}

impl DrawingContext for ShapeCanvas {
    fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.fill_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.line_cap = cap;
    }

    fn move_to(&mut self, to: Point) {
        self.path.push(SubPath {
            start: to,
            pieces: Vec::new(),
        });
    }

    fn line_to(&mut self, to: Point) {
        self.current_subpath(to).pieces.push(PathPiece::Line(to));
    }

    fn quad_curve_to(&mut self, control: Point, to: Point) {
        self.current_subpath(to)
            .pieces
            .push(PathPiece::Quad { control, to });
    }

    fn stroke_path(&mut self) {
        let stroke = Stroke::new(self.line_width, self.stroke_color);
        for subpath in std::mem::take(&mut self.path) {
            if subpath.pieces.is_empty() {
                continue;
            }

            let mut from = subpath.start;
            for piece in &subpath.pieces {
                match *piece {
                    PathPiece::Line(to) => {
                        self.shapes.push(Shape::line_segment([from, to], stroke));
                        from = to;
                    }
                    PathPiece::Quad { control, to } => {
                        self.shapes.push(Shape::QuadraticBezier(
                            QuadraticBezierShape::from_points_stroke(
                                [from, control, to],
                                false,
                                Color32::TRANSPARENT,
                                stroke,
                            ),
                        ));
                        from = to;
                    }
                }
            }

            self.add_cap(subpath.start);
            self.add_cap(subpath.end());
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        self.shapes
            .push(Shape::circle_filled(center, radius, self.fill_color));
    }
}

impl Canvas for ShapeCanvas {
    fn context(&mut self) -> &mut dyn DrawingContext {
        self
    }

    fn reset(&mut self) {
        self.shapes.clear();
        self.path.clear();
    }
}
