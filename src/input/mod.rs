use crate::geometry::{Point, Velocity};

mod gestures;
pub use gestures::{PointerFrame, PointerGestures};

/// Phase of a drag gesture as reported by the gesture source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Began,
    Changed,
    Ended,
    /// The gesture was interrupted; whatever was drawn so far is kept
    Failed,
}

/// Discrete input event delivered to the draw controller.
///
/// Positions are canvas-local. Velocity is only meaningful for
/// [`DragPhase::Changed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Drag {
        phase: DragPhase,
        position: Point,
        velocity: Velocity,
    },
    Tap {
        position: Point,
    },
}

impl GestureEvent {
    pub fn began(position: Point) -> Self {
        Self::Drag {
            phase: DragPhase::Began,
            position,
            velocity: Velocity::ZERO,
        }
    }

    pub fn changed(position: Point, velocity: Velocity) -> Self {
        Self::Drag {
            phase: DragPhase::Changed,
            position,
            velocity,
        }
    }

    pub fn ended(position: Point) -> Self {
        Self::Drag {
            phase: DragPhase::Ended,
            position,
            velocity: Velocity::ZERO,
        }
    }

    pub fn failed(position: Point) -> Self {
        Self::Drag {
            phase: DragPhase::Failed,
            position,
            velocity: Velocity::ZERO,
        }
    }

    pub fn tap(position: Point) -> Self {
        Self::Tap { position }
    }
}
