use egui::Pos2;

/// A sampled point on the canvas, in canvas-local coordinates.
pub type Point = Pos2;

/// Pointer velocity in points per second.
pub type Velocity = egui::Vec2;

/// Straight line between two consecutive samples of a stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Point halfway between both endpoints
    pub fn midpoint(&self) -> Point {
        midpoint(self.a, self.b)
    }
}

pub fn midpoint(a: Point, b: Point) -> Point {
    Pos2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_midpoint() {
        let segment = Segment::new(pos2(0.0, 0.0), pos2(10.0, -4.0));
        assert_eq!(segment.midpoint(), pos2(5.0, -2.0));
    }

    #[test]
    fn test_segment_equality_uses_endpoints() {
        let first = Segment::new(pos2(1.0, 2.0), pos2(3.0, 4.0));
        let same = Segment::new(pos2(1.0, 2.0), pos2(3.0, 4.0));
        let reversed = Segment::new(pos2(3.0, 4.0), pos2(1.0, 2.0));

        assert_eq!(first, same);
        assert_ne!(first, reversed);
        assert_eq!(first.midpoint(), reversed.midpoint());
    }
}
