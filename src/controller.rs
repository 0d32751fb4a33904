use egui::Color32;

use crate::canvas::Canvas;
use crate::command::{CircleDrawCommand, CommandHistory, ComposedCommand, DrawCommand, LineDrawCommand};
use crate::error::SettingsError;
use crate::geometry::{Point, Segment, Velocity};
use crate::input::{DragPhase, GestureEvent};
use crate::settings::{DrawSettings, validate_width};
use crate::width::modulated_width;

/// Accumulated state of the drag currently being captured
#[derive(Debug, Clone)]
struct StrokeSession {
    last_point: Point,
    last_segment: Option<Segment>,
    last_velocity: Velocity,
    last_width: Option<f32>,
    stroke: ComposedCommand,
}

impl StrokeSession {
    fn new(start: Point) -> Self {
        Self {
            last_point: start,
            last_segment: None,
            last_velocity: Velocity::ZERO,
            last_width: None,
            stroke: ComposedCommand::default(),
        }
    }
}

/// Capture state of the controller
#[derive(Debug, Clone, Default)]
enum CaptureState {
    #[default]
    Idle,
    Capturing(StrokeSession),
}

/// Turns gesture events into draw commands.
///
/// Every command is painted on the canvas as soon as it is built. Completed
/// gestures are kept in a [`CommandHistory`] so that [`undo`](Self::undo) can
/// clear the canvas and replay what remains.
///
/// ```text
///            drag began              drag ended / failed
///   ┌──────┐ ─────────► ┌───────────┐ ──────────────────► ┌──────┐
///   │ Idle │            │ Capturing │                     │ Idle │
///   └──────┘ ◄─┐        └───────────┘ ◄─┐                 └──────┘
///      tap ────┘          drag changed ─┘
/// ```
#[derive(Debug)]
pub struct FreehandDrawController<C: Canvas> {
    canvas: C,
    settings: DrawSettings,
    state: CaptureState,
    history: CommandHistory,
}

impl<C: Canvas> FreehandDrawController<C> {
    pub fn new(canvas: C) -> Self {
        Self::with_settings(canvas, DrawSettings::default())
    }

    pub fn with_settings(canvas: C, settings: DrawSettings) -> Self {
        Self {
            canvas,
            settings,
            state: CaptureState::Idle,
            history: CommandHistory::new(),
        }
    }

    pub fn settings(&self) -> DrawSettings {
        self.settings
    }

    pub fn color(&self) -> Color32 {
        self.settings.color
    }

    /// Applies to commands built from now on, including the rest of an
    /// in-progress stroke
    pub fn set_color(&mut self, color: Color32) {
        self.settings.color = color;
    }

    pub fn width(&self) -> f32 {
        self.settings.width
    }

    pub fn set_width(&mut self, width: f32) -> Result<(), SettingsError> {
        validate_width(width)?;
        self.settings.width = width;
        Ok(())
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.state, CaptureState::Capturing(_))
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Remove the most recent gesture and redraw everything before it.
    /// Does nothing when there is nothing to undo.
    ///
    /// A stroke still being captured is not part of the history yet; it is
    /// repainted on top so it survives the redraw.
    pub fn undo(&mut self) {
        let Some(removed) = self.history.pop() else {
            return;
        };
        log::debug!(
            "undo {} command, {} left in history",
            removed.kind(),
            self.history.len()
        );

        self.canvas.reset();
        self.canvas.execute_commands(self.history.commands());
        if let CaptureState::Capturing(session) = &self.state {
            self.canvas.execute_commands(session.stroke.commands());
        }
    }

    /// Feed one gesture event; events must arrive in the order they happened
    pub fn handle_event(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Drag {
                phase,
                position,
                velocity,
            } => match phase {
                DragPhase::Began => self.start_at(position),
                DragPhase::Changed => self.continue_at(position, velocity),
                DragPhase::Ended | DragPhase::Failed => self.end_at(position),
            },
            GestureEvent::Tap { position } => self.tap_at(position),
        }
    }

    fn start_at(&mut self, point: Point) {
        debug_assert!(!self.is_capturing(), "drag began while another drag is captured");
        if self.is_capturing() {
            log::warn!("drag began while capturing, committing the previous stroke");
            self.end_at(point);
        }

        self.state = CaptureState::Capturing(StrokeSession::new(point));
    }

    fn continue_at(&mut self, point: Point, velocity: Velocity) {
        debug_assert!(self.is_capturing(), "drag changed without a drag in progress");
        let CaptureState::Capturing(session) = &mut self.state else {
            log::warn!("ignoring drag movement to {:?} outside of a stroke", point);
            return;
        };

        let base_width = self.settings.width;
        let segment_width = modulated_width(
            base_width,
            velocity,
            session.last_velocity,
            session.last_width.unwrap_or(base_width),
        );
        let segment = Segment::new(session.last_point, point);
        let line = LineDrawCommand::new(
            segment,
            session.last_segment,
            segment_width,
            self.settings.color,
        );
        log::trace!("segment {:?} width {:.2}", segment, segment_width);

        self.canvas.execute_commands(&[DrawCommand::Line(line)]);

        session.stroke.add_command(line);
        session.last_point = point;
        session.last_segment = Some(segment);
        session.last_velocity = velocity;
        session.last_width = Some(segment_width);
    }

    fn end_at(&mut self, point: Point) {
        debug_assert!(self.is_capturing(), "drag ended without a drag in progress");
        match std::mem::take(&mut self.state) {
            CaptureState::Capturing(session) => {
                if session.stroke.is_empty() {
                    log::debug!("drag ended at {:?} without movement, nothing to commit", point);
                } else {
                    log::debug!("committing stroke of {} segments", session.stroke.len());
                    self.history.push(session.stroke);
                }
            }
            CaptureState::Idle => {
                log::warn!("ignoring drag end at {:?} outside of a stroke", point);
            }
        }
    }

    fn tap_at(&mut self, point: Point) {
        let circle = CircleDrawCommand::new(point, self.settings.width / 2.0, self.settings.color);
        log::debug!("dot at {:?} radius {:.2}", point, circle.radius);

        self.canvas.execute_commands(&[DrawCommand::Circle(circle)]);
        self.history.push(circle);
    }
}
