use egui::{Key, Pos2, Response, Vec2};

use super::GestureEvent;
use crate::geometry::{Point, Velocity};

/// Pointer state of the canvas for one egui frame, in canvas-local coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerFrame {
    /// Where the pointer currently interacts with the canvas
    pub position: Option<Point>,
    /// Where the button went down
    pub press_origin: Option<Point>,
    pub velocity: Velocity,
    pub drag_delta: Vec2,
    pub drag_started: bool,
    pub dragged: bool,
    pub drag_stopped: bool,
    pub clicked: bool,
    /// Escape pressed or window focus lost
    pub cancel_requested: bool,
}

impl PointerFrame {
    /// Sample the pointer state of a `Sense::click_and_drag()` canvas response.
    /// `origin` is the screen position of the canvas' top-left corner.
    pub fn from_response(response: &Response, origin: Pos2) -> Self {
        let to_local = |pos: Pos2| Pos2::ZERO + (pos - origin);
        let (velocity, press_origin, cancel_requested) = response.ctx.input(|i| {
            (
                i.pointer.velocity(),
                i.pointer.press_origin(),
                i.key_pressed(Key::Escape) || !i.focused,
            )
        });

        Self {
            position: response.interact_pointer_pos().map(to_local),
            press_origin: press_origin.map(to_local),
            velocity,
            drag_delta: response.drag_delta(),
            drag_started: response.drag_started(),
            dragged: response.dragged(),
            drag_stopped: response.drag_stopped(),
            clicked: response.clicked(),
            cancel_requested,
        }
    }
}

/// Turns per-frame egui pointer state into discrete gesture events.
///
/// Guarantees the controller sees `Began` before any other drag phase and
/// exactly one `Ended` or `Failed` per drag. After a cancel, the rest of the
/// physical drag is ignored until the button is released.
#[derive(Debug, Default)]
pub struct PointerGestures {
    dragging: bool,
    cancelled: bool,
    last_position: Point,
}

impl PointerGestures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Collect the events for this frame of a canvas response
    pub fn collect(&mut self, response: &Response, origin: Pos2) -> Vec<GestureEvent> {
        self.translate(PointerFrame::from_response(response, origin))
    }

    pub fn translate(&mut self, frame: PointerFrame) -> Vec<GestureEvent> {
        let mut events = Vec::new();

        if frame.drag_started && !self.dragging {
            if let Some(position) = frame.press_origin.or(frame.position) {
                self.dragging = true;
                self.cancelled = false;
                self.last_position = position;
                events.push(GestureEvent::began(position));
            }
        }

        if self.dragging {
            if let Some(position) = frame.position {
                if frame.dragged && frame.drag_delta != Vec2::ZERO && position != self.last_position {
                    self.last_position = position;
                    events.push(GestureEvent::changed(position, frame.velocity));
                }
            }

            if frame.cancel_requested {
                log::debug!("drag cancelled at {:?}", self.last_position);
                self.dragging = false;
                self.cancelled = true;
                events.push(GestureEvent::failed(self.last_position));
            } else if frame.drag_stopped {
                self.dragging = false;
                let position = frame.position.unwrap_or(self.last_position);
                events.push(GestureEvent::ended(position));
            }
        } else if frame.drag_stopped {
            self.cancelled = false;
        }

        if frame.clicked && !self.dragging && !self.cancelled {
            if let Some(position) = frame.position {
                events.push(GestureEvent::tap(position));
            }
        }

        events
    }
}
