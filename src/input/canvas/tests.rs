use super::*;
use crate::draw::{BLUE, Bounds, Color, Geometry, PURPLE, Painter, RED, Segment};

/// Records every stroke instead of rasterizing it.
#[derive(Default)]
struct RecordingPainter {
    strokes: Vec<(Geometry, Color, f64)>,
}

impl Painter for RecordingPainter {
    fn stroke_geometry(&mut self, geometry: &Geometry, color: Color, width: f64) {
        self.strokes.push((geometry.clone(), color, width));
    }
}

fn create_test_canvas(tool: ToolKind) -> Canvas {
    let mut canvas = Canvas::new(tool, PURPLE, 5.0);
    canvas.needs_redraw = false;
    canvas
}

fn drag(canvas: &mut Canvas, from: (i32, i32), to: (i32, i32)) {
    canvas.on_pointer_down(from.0, from.1);
    canvas.on_pointer_move(to.0, to.1);
    canvas.on_pointer_up(to.0, to.1);
}

#[test]
fn drag_commits_shape_with_current_attributes() {
    let mut canvas = create_test_canvas(ToolKind::Line);
    drag(&mut canvas, (10, 10), (30, 40));

    assert_eq!(canvas.shapes().len(), 1);
    let shape = &canvas.shapes()[0];
    assert_eq!(
        shape.geometry(),
        &Geometry::Line(Segment::new((10, 10), (30, 40)))
    );
    assert_eq!(shape.color(), PURPLE);
    assert_eq!(shape.stroke_width(), 5.0);
    assert!(canvas.is_clear_enabled());
    assert!(canvas.needs_redraw);
    assert!(!canvas.tool().is_enabled());
}

#[test]
fn zero_width_press_commits_nothing() {
    let mut canvas = create_test_canvas(ToolKind::Rectangle);
    canvas.set_stroke_width(0.0);

    canvas.on_pointer_down(5, 5);
    assert!(!canvas.tool().is_enabled());

    canvas.on_pointer_move(20, 20);
    assert!(!canvas.needs_redraw);
    canvas.on_pointer_up(20, 20);

    assert!(canvas.shapes().is_empty());
    assert!(!canvas.is_clear_enabled());
}

#[test]
fn negative_width_is_treated_like_zero() {
    let mut canvas = create_test_canvas(ToolKind::Line);
    canvas.set_stroke_width(-3.0);
    drag(&mut canvas, (0, 0), (8, 8));
    assert!(canvas.shapes().is_empty());
}

#[test]
fn moves_outside_a_press_are_ignored() {
    let mut canvas = create_test_canvas(ToolKind::Line);
    let before = *canvas.tool().cursor();

    canvas.on_pointer_move(50, 60);

    assert_eq!(*canvas.tool().cursor(), before);
    assert!(!canvas.needs_redraw);
}

#[test]
fn release_without_press_commits_nothing() {
    let mut canvas = create_test_canvas(ToolKind::Ellipse);
    canvas.on_pointer_up(10, 10);
    assert!(canvas.shapes().is_empty());
    assert!(!canvas.needs_redraw);
}

#[test]
fn pencil_stroke_commits_connected_path() {
    let mut canvas = create_test_canvas(ToolKind::Pencil);
    canvas.on_pointer_down(0, 0);
    canvas.on_pointer_move(1, 1);
    canvas.on_pointer_move(2, 2);
    canvas.on_pointer_up(2, 2);

    assert_eq!(
        canvas.shapes()[0].geometry(),
        &Geometry::Path(vec![
            Segment::new((0, 0), (1, 1)),
            Segment::new((1, 1), (2, 2)),
        ])
    );

    // Next stroke starts from an empty path.
    canvas.on_pointer_down(40, 40);
    canvas.on_pointer_move(41, 40);
    canvas.on_pointer_up(41, 40);
    assert_eq!(
        canvas.shapes()[1].geometry(),
        &Geometry::Path(vec![Segment::new((40, 40), (41, 40))])
    );
}

#[test]
fn pencil_click_commits_a_dot() {
    let mut canvas = create_test_canvas(ToolKind::Pencil);
    canvas.on_pointer_down(12, 34);
    canvas.on_pointer_up(12, 34);

    assert_eq!(
        canvas.shapes()[0].geometry(),
        &Geometry::Path(vec![Segment::new((12, 34), (12, 34))])
    );
    assert!(canvas.is_clear_enabled());
}

#[test]
fn clear_empties_list_and_disables_affordance() {
    let mut canvas = create_test_canvas(ToolKind::Rectangle);
    drag(&mut canvas, (0, 0), (10, 10));
    drag(&mut canvas, (5, 5), (15, 20));
    drag(&mut canvas, (1, 2), (3, 4));
    assert_eq!(canvas.shapes().len(), 3);

    canvas.needs_redraw = false;
    canvas.clear();

    assert!(canvas.shapes().is_empty());
    assert!(!canvas.is_clear_enabled());
    assert!(canvas.needs_redraw);

    let mut painter = RecordingPainter::default();
    canvas.redraw(&mut painter);
    assert_eq!(painter.strokes, vec![(Geometry::Empty, PURPLE, 5.0)]);
}

#[test]
fn clear_leaves_in_progress_stroke_alone() {
    let mut canvas = create_test_canvas(ToolKind::Rectangle);
    drag(&mut canvas, (0, 0), (10, 10));

    canvas.on_pointer_down(20, 20);
    canvas.on_pointer_move(30, 35);
    canvas.clear();

    assert!(canvas.tool().is_enabled());
    assert_eq!(canvas.tool().cursor().current(), (30, 35));

    let mut painter = RecordingPainter::default();
    canvas.redraw(&mut painter);
    assert_eq!(
        painter.strokes,
        vec![(
            Geometry::Rect(Bounds::from_corners((20, 20), (30, 35))),
            PURPLE,
            5.0
        )]
    );
}

#[test]
fn redraw_layers_committed_shapes_under_live_preview() {
    let mut canvas = create_test_canvas(ToolKind::Line);
    drag(&mut canvas, (0, 0), (10, 0));
    canvas.set_tool(ToolKind::Ellipse);
    drag(&mut canvas, (0, 0), (10, 10));

    canvas.set_color(BLUE);
    canvas.set_stroke_width(2.0);
    canvas.on_pointer_down(50, 50);
    canvas.on_pointer_move(60, 70);

    let mut painter = RecordingPainter::default();
    canvas.redraw(&mut painter);

    assert_eq!(painter.strokes.len(), 3);
    assert_eq!(
        painter.strokes[0],
        (Geometry::Line(Segment::new((0, 0), (10, 0))), PURPLE, 5.0)
    );
    assert_eq!(
        painter.strokes[1],
        (
            Geometry::Ellipse(Bounds::from_corners((0, 0), (10, 10))),
            PURPLE,
            5.0
        )
    );
    assert_eq!(
        painter.strokes[2],
        (
            Geometry::Ellipse(Bounds::from_corners((50, 50), (60, 70))),
            BLUE,
            2.0
        )
    );
}

#[test]
fn color_change_does_not_recolor_committed_shapes() {
    let mut canvas = create_test_canvas(ToolKind::Line);
    drag(&mut canvas, (0, 0), (5, 5));

    canvas.set_color(RED);
    canvas.set_stroke_width(12.0);

    let mut painter = RecordingPainter::default();
    canvas.redraw(&mut painter);

    assert_eq!(painter.strokes[0].1, PURPLE);
    assert_eq!(painter.strokes[0].2, 5.0);
    assert_eq!(canvas.color(), RED);
}

#[test]
fn set_tool_keeps_committed_shapes_and_abandons_active_stroke() {
    let mut canvas = create_test_canvas(ToolKind::Line);
    drag(&mut canvas, (0, 0), (5, 5));

    canvas.on_pointer_down(10, 10);
    canvas.set_tool(ToolKind::Pencil);

    assert_eq!(canvas.active_tool(), ToolKind::Pencil);
    assert_eq!(canvas.shapes().len(), 1);

    canvas.set_tool(ToolKind::Line);
    assert!(!canvas.tool().is_enabled());
    canvas.on_pointer_up(10, 10);
    assert_eq!(canvas.shapes().len(), 1);
}

#[test]
fn tools_persist_across_switches() {
    let mut canvas = create_test_canvas(ToolKind::Rectangle);
    drag(&mut canvas, (3, 4), (9, 9));
    canvas.set_tool(ToolKind::Line);
    canvas.set_tool(ToolKind::Rectangle);

    assert_eq!(canvas.tool().cursor().origin(), (3, 4));
}
