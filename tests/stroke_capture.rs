use egui::{Color32, pos2, vec2};
use freehand_draw::canvas::DrawOp;
use freehand_draw::{
    Canvas, DrawCommand, FreehandDrawController, GestureEvent, LineDrawCommand, RecordingCanvas,
    Segment,
};

fn new_controller() -> FreehandDrawController<RecordingCanvas> {
    FreehandDrawController::new(RecordingCanvas::new())
}

fn stroke_lines(command: &DrawCommand) -> Vec<LineDrawCommand> {
    match command {
        DrawCommand::Composed(composed) => composed
            .commands()
            .iter()
            .map(|command| match command {
                DrawCommand::Line(line) => *line,
                other => panic!("expected a line inside a stroke, got {:?}", other),
            })
            .collect(),
        other => panic!("expected a composed stroke, got {:?}", other),
    }
}

#[test]
fn test_horizontal_stroke_scenario() {
    let mut controller = new_controller();

    controller.handle_event(GestureEvent::began(pos2(0.0, 0.0)));
    controller.handle_event(GestureEvent::changed(pos2(10.0, 0.0), vec2(10.0, 0.0)));
    controller.handle_event(GestureEvent::changed(pos2(20.0, 0.0), vec2(10.0, 0.0)));
    controller.handle_event(GestureEvent::ended(pos2(20.0, 0.0)));

    let history = controller.history();
    assert_eq!(history.len(), 1);

    let lines = stroke_lines(&history.commands()[0]);
    assert_eq!(lines.len(), 2);

    let first_segment = Segment::new(pos2(0.0, 0.0), pos2(10.0, 0.0));
    assert_eq!(lines[0].current, first_segment);
    assert_eq!(lines[0].previous, None);
    assert_eq!(lines[1].current, Segment::new(pos2(10.0, 0.0), pos2(20.0, 0.0)));
    assert_eq!(lines[1].previous, Some(first_segment));
    assert_eq!(lines[0].color, Color32::BLACK);

    controller.undo();
    assert!(controller.history().is_empty());
    assert!(controller.canvas().is_blank());
}

#[test]
fn test_tap_scenario() {
    let mut controller = new_controller();
    controller.set_width(5.0).unwrap();

    controller.handle_event(GestureEvent::tap(pos2(5.0, 5.0)));

    let history = controller.history();
    assert_eq!(history.len(), 1);
    match &history.commands()[0] {
        DrawCommand::Circle(circle) => {
            assert_eq!(circle.center, pos2(5.0, 5.0));
            assert_eq!(circle.radius, 2.5);
        }
        other => panic!("expected a dot, got {:?}", other),
    }
    assert_eq!(
        controller.canvas().ops().last(),
        Some(&DrawOp::FillCircle {
            center: pos2(5.0, 5.0),
            radius: 2.5,
        })
    );
}

#[test]
fn test_stroke_commits_once_at_end() {
    let mut controller = new_controller();
    controller.handle_event(GestureEvent::began(pos2(0.0, 0.0)));

    for k in 1..=6 {
        let x = k as f32 * 4.0;
        controller.handle_event(GestureEvent::changed(pos2(x, x), vec2(300.0, 300.0)));
        // nothing reaches the history while the drag is in progress
        assert!(controller.history().is_empty());
    }

    controller.handle_event(GestureEvent::ended(pos2(24.0, 24.0)));
    assert_eq!(controller.history().len(), 1);
    assert_eq!(stroke_lines(&controller.history().commands()[0]).len(), 6);
}

#[test]
fn test_segments_are_painted_live() {
    let mut controller = new_controller();
    controller.handle_event(GestureEvent::began(pos2(0.0, 0.0)));
    assert!(controller.canvas().is_blank());

    controller.handle_event(GestureEvent::changed(pos2(8.0, 0.0), vec2(100.0, 0.0)));
    assert!(controller.canvas().ops().contains(&DrawOp::LineTo(pos2(8.0, 0.0))));
    assert_eq!(controller.canvas().resets(), 0);
}

#[test]
fn test_failed_drag_keeps_what_was_drawn() {
    let mut controller = new_controller();
    controller.handle_event(GestureEvent::began(pos2(0.0, 0.0)));
    controller.handle_event(GestureEvent::changed(pos2(5.0, 5.0), vec2(50.0, 50.0)));
    controller.handle_event(GestureEvent::failed(pos2(5.0, 5.0)));

    assert!(!controller.is_capturing());
    assert_eq!(controller.history().len(), 1);
    assert_eq!(stroke_lines(&controller.history().commands()[0]).len(), 1);
}

#[test]
fn test_drag_without_movement_commits_nothing() {
    let mut controller = new_controller();
    controller.handle_event(GestureEvent::began(pos2(3.0, 3.0)));
    controller.handle_event(GestureEvent::ended(pos2(3.0, 3.0)));

    assert!(controller.history().is_empty());
    assert!(controller.canvas().is_blank());
}

#[test]
fn test_taps_are_never_grouped() {
    let mut controller = new_controller();
    controller.handle_event(GestureEvent::tap(pos2(1.0, 1.0)));
    controller.handle_event(GestureEvent::began(pos2(0.0, 0.0)));
    controller.handle_event(GestureEvent::changed(pos2(9.0, 0.0), vec2(90.0, 0.0)));
    controller.handle_event(GestureEvent::ended(pos2(9.0, 0.0)));
    controller.handle_event(GestureEvent::tap(pos2(2.0, 2.0)));

    let kinds: Vec<_> = controller
        .history()
        .commands()
        .iter()
        .map(DrawCommand::kind)
        .collect();
    assert_eq!(kinds, vec!["circle", "composed", "circle"]);
}

#[test]
fn test_settings_are_not_retroactive() {
    let mut controller = new_controller();
    controller.set_color(Color32::RED);
    controller.handle_event(GestureEvent::tap(pos2(1.0, 1.0)));

    controller.set_color(Color32::BLUE);
    controller.set_width(10.0).unwrap();
    controller.handle_event(GestureEvent::tap(pos2(2.0, 2.0)));

    let circles: Vec<_> = controller
        .history()
        .commands()
        .iter()
        .map(|command| match command {
            DrawCommand::Circle(circle) => (circle.color, circle.radius),
            other => panic!("expected a dot, got {:?}", other),
        })
        .collect();
    assert_eq!(circles, vec![(Color32::RED, 2.5), (Color32::BLUE, 5.0)]);
}

#[test]
fn test_segment_widths_follow_velocity() {
    let mut controller = new_controller();
    controller.handle_event(GestureEvent::began(pos2(0.0, 0.0)));
    controller.handle_event(GestureEvent::changed(pos2(10.0, 0.0), vec2(10.0, 0.0)));
    controller.handle_event(GestureEvent::changed(pos2(20.0, 0.0), vec2(10.0, 0.0)));
    controller.handle_event(GestureEvent::ended(pos2(20.0, 0.0)));

    let lines = stroke_lines(&controller.history().commands()[0]);
    let expected_first = freehand_draw::modulated_width(5.0, vec2(10.0, 0.0), vec2(0.0, 0.0), 5.0);
    let expected_second =
        freehand_draw::modulated_width(5.0, vec2(10.0, 0.0), vec2(10.0, 0.0), expected_first);
    assert_eq!(lines[0].width, expected_first);
    assert_eq!(lines[1].width, expected_second);
    // slow motion thickens the pen
    assert!(lines[1].width > lines[0].width);
}

#[test]
fn test_execute_commands_runs_batch_in_order() {
    let mut controller = new_controller();
    controller.handle_event(GestureEvent::tap(pos2(1.0, 1.0)));
    controller.handle_event(GestureEvent::tap(pos2(2.0, 2.0)));

    let mut replay = RecordingCanvas::new();
    replay.execute_commands(controller.history().commands());
    assert_eq!(replay.ops(), controller.canvas().ops());
}
