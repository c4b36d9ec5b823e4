//! End-to-end gesture scenarios driven through the canvas shell.

use drafttable_core::{
    Canvas, DraftingAids, Element, KeyEvent, Line, Modifiers, MouseButton, PointerEvent, Rectangle,
    SequentialIds, Shape, ToolKind,
};
use kurbo::{Point, Rect};

fn canvas_with(elements: Vec<Element>, tool: ToolKind) -> Canvas {
    let mut canvas = Canvas::with_elements(elements, Box::new(SequentialIds::new("g")));
    canvas.aids = DraftingAids::none();
    canvas.tool = tool;
    canvas
}

fn drag(canvas: &mut Canvas, from: (f64, f64), to: (f64, f64)) {
    canvas.pointer_down(&PointerEvent::down(from.into()));
    canvas.pointer_move(&PointerEvent::moved(to.into()));
    canvas.pointer_up(&PointerEvent::up(to.into()));
}

fn line(id: &str, a: (f64, f64), b: (f64, f64)) -> Element {
    Element::new(id.into(), Shape::Line(Line::new(a.into(), b.into())))
}

#[test]
fn test_draw_commits_only_past_threshold() {
    let mut canvas = canvas_with(Vec::new(), ToolKind::Line);

    drag(&mut canvas, (100.0, 100.0), (103.0, 100.0));
    assert_eq!(canvas.elements().len(), 1);
    assert_eq!(canvas.elements()[0].id, "g-1");

    drag(&mut canvas, (100.0, 100.0), (101.0, 100.0));
    assert_eq!(canvas.elements().len(), 1);
    assert!(canvas.session().is_idle());
}

#[test]
fn test_negative_rectangle_normalizes_for_picking_and_export() {
    let mut canvas = canvas_with(Vec::new(), ToolKind::Rectangle);
    drag(&mut canvas, (100.0, 100.0), (50.0, 130.0));

    let Shape::Rectangle(rect) = canvas.elements()[0].shape else {
        panic!("expected a rectangle");
    };
    assert_eq!(rect, Rectangle::new(Point::new(100.0, 100.0), -50.0, 30.0));
    assert_eq!(rect.normalized(), Rect::new(50.0, 100.0, 100.0, 130.0));

    canvas.set_tool(ToolKind::Select);
    canvas.pointer_down(&PointerEvent::down(Point::new(60.0, 120.0)));
    canvas.pointer_up(&PointerEvent::up(Point::new(60.0, 120.0)));
    assert_eq!(canvas.selected_ids(), vec!["g-1".to_string()]);

    let text = canvas.export_dxf();
    assert!(text.contains("10\n50\n20\n100\n10\n50\n20\n130\n"));
}

#[test]
fn test_box_select_is_inclusive() {
    let elements = vec![
        line("corner", (0.0, 0.0), (400.0, 400.0)),
        line("far-corner", (200.0, 200.0), (300.0, 300.0)),
        line("outside", (200.5, 10.0), (10.0, 10.0)),
    ];
    let mut canvas = canvas_with(elements, ToolKind::Select);
    // Start far enough from every line to miss the pick.
    canvas.pointer_down(&PointerEvent::down(Point::new(200.0, 0.0)));
    canvas.pointer_up(&PointerEvent::up(Point::new(0.0, 200.0)));
    assert_eq!(canvas.selected_ids(), vec!["corner".to_string(), "far-corner".to_string()]);
}

#[test]
fn test_shift_box_select_keeps_previous_selection() {
    let elements = vec![
        line("kept", (500.0, 500.0), (600.0, 500.0)).with_selected(true),
        line("boxed", (50.0, 50.0), (60.0, 60.0)),
    ];
    let mut canvas = canvas_with(elements, ToolKind::Select);
    let shift = Modifiers::shift();
    canvas.pointer_down(&PointerEvent::down(Point::new(0.0, 0.0)).with_modifiers(shift));
    canvas.pointer_up(&PointerEvent::up(Point::new(100.0, 100.0)).with_modifiers(shift));
    assert_eq!(canvas.selected_ids().len(), 2);
}

#[test]
fn test_mirror_across_y_axis() {
    let mut canvas = canvas_with(vec![line("src", (10.0, 20.0), (30.0, 40.0)).with_selected(true)], ToolKind::Mirror);
    drag(&mut canvas, (0.0, 0.0), (0.0, 100.0));

    let elements = canvas.elements();
    assert_eq!(elements.len(), 2);
    assert!(!elements[0].selected);
    assert_eq!(canvas.selected_ids(), vec!["g-1".to_string()]);
    let Shape::Line(copy) = elements[1].shape else {
        panic!("expected a line");
    };
    assert!((copy.start.x + 10.0).abs() < 1e-9 && (copy.start.y - 20.0).abs() < 1e-9);
    assert!((copy.end.x + 30.0).abs() < 1e-9 && (copy.end.y - 40.0).abs() < 1e-9);
}

#[test]
fn test_move_uses_raw_delta_even_with_snapping() {
    let elements = vec![line("a", (0.0, 50.0), (100.0, 50.0)).with_selected(true)];
    let mut canvas = canvas_with(elements, ToolKind::Select);
    canvas.aids = DraftingAids::default();

    drag(&mut canvas, (50.0, 50.0), (57.0, 53.0));
    assert_eq!(
        canvas.elements()[0].shape,
        Shape::Line(Line::new(Point::new(7.0, 53.0), Point::new(107.0, 53.0)))
    );
}

#[test]
fn test_object_snap_drives_draw_endpoint_and_indicator() {
    let mut canvas = canvas_with(vec![line("base", (0.0, 0.0), (200.0, 0.0))], ToolKind::Line);
    canvas.aids = DraftingAids { grid: false, object_snap: true, ortho: false };

    canvas.pointer_down(&PointerEvent::down(Point::new(300.0, 300.0)));
    canvas.pointer_move(&PointerEvent::moved(Point::new(197.0, 8.0)));
    assert_eq!(canvas.snap_indicator(), Some(Point::new(200.0, 0.0)));
    canvas.pointer_up(&PointerEvent::up(Point::new(197.0, 8.0)));

    assert_eq!(
        canvas.elements()[1].shape,
        Shape::Line(Line::new(Point::new(300.0, 300.0), Point::new(200.0, 0.0)))
    );
}

#[test]
fn test_pan_then_draw_lands_in_plane_coordinates() {
    let mut canvas = canvas_with(Vec::new(), ToolKind::Line);
    canvas.pointer_down(&PointerEvent::down(Point::new(400.0, 300.0)).with_button(MouseButton::Middle));
    canvas.pointer_move(&PointerEvent::moved(Point::new(300.0, 300.0)));
    canvas.pointer_up(&PointerEvent::up(Point::new(300.0, 300.0)).with_button(MouseButton::Middle));
    assert_eq!(canvas.view.x, 100.0);
    assert!(canvas.elements().is_empty());

    drag(&mut canvas, (0.0, 0.0), (50.0, 0.0));
    assert_eq!(
        canvas.elements()[0].shape,
        Shape::Line(Line::new(Point::new(100.0, 0.0), Point::new(150.0, 0.0)))
    );
}

#[test]
fn test_trim_then_delete_key() {
    let elements = vec![
        line("a", (0.0, 100.0), (200.0, 100.0)),
        line("b", (0.0, 300.0), (200.0, 300.0)).with_selected(true),
        line("c", (0.0, 500.0), (200.0, 500.0)),
    ];
    let mut canvas = canvas_with(elements, ToolKind::Trim);
    canvas.pointer_down(&PointerEvent::down(Point::new(100.0, 102.0)));
    assert!(canvas.session().is_idle());
    canvas.pointer_up(&PointerEvent::up(Point::new(100.0, 102.0)));
    assert_eq!(canvas.elements().len(), 2);

    canvas.set_tool(ToolKind::Select);
    canvas.key(&KeyEvent::Pressed("Delete".into()));
    let ids: Vec<_> = canvas.elements().iter().map(|el| el.id.as_str()).collect();
    assert_eq!(ids, vec!["c"]);
}
