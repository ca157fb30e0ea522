//! Rendering of tool geometry, with a Cairo-backed painter.

use super::color::Color;
use super::geometry::{Bounds, Geometry, Segment};
use super::shape::CommittedShape;

/// Destination for stroked geometry.
///
/// The canvas redraw routine only talks to this trait, so the same replay logic
/// drives the Cairo surface in the window and recording painters in tests.
pub trait Painter {
    /// Strokes `geometry` with the given color and line width.
    fn stroke_geometry(&mut self, geometry: &Geometry, color: Color, width: f64);
}

impl Painter for cairo::Context {
    fn stroke_geometry(&mut self, geometry: &Geometry, color: Color, width: f64) {
        render_geometry(self, geometry, color, width);
    }
}

/// Renders all committed shapes in order (first shape = bottom layer).
pub fn render_shapes<P: Painter + ?Sized>(painter: &mut P, shapes: &[CommittedShape]) {
    for shape in shapes {
        painter.stroke_geometry(shape.geometry(), shape.color(), shape.stroke_width());
    }
}

/// Fills the whole surface with an opaque background color.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint();
}

/// Strokes a single geometry onto a Cairo context.
///
/// Empty geometry and non-positive widths draw nothing.
pub fn render_geometry(ctx: &cairo::Context, geometry: &Geometry, color: Color, width: f64) {
    if width <= 0.0 || geometry.is_empty() {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);

    match geometry {
        Geometry::Empty => {}
        Geometry::Line(segment) => render_line(ctx, segment),
        Geometry::Rect(bounds) => render_rect(ctx, bounds),
        Geometry::Ellipse(bounds) => render_ellipse(ctx, bounds),
        Geometry::Path(segments) => render_path(ctx, segments),
    }
}

/// Render a straight line (zero-length lines become a round dot)
fn render_line(ctx: &cairo::Context, segment: &Segment) {
    if segment.is_degenerate() {
        render_dot(ctx, segment.start);
        return;
    }

    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.move_to(segment.start.0 as f64, segment.start.1 as f64);
    ctx.line_to(segment.end.0 as f64, segment.end.1 as f64);
    let _ = ctx.stroke();
}

/// Fill a disc one stroke width across, centered on `point`
fn render_dot(ctx: &cairo::Context, point: (i32, i32)) {
    ctx.arc(
        point.0 as f64,
        point.1 as f64,
        ctx.line_width() / 2.0,
        0.0,
        2.0 * std::f64::consts::PI,
    );
    let _ = ctx.fill();
}

/// Render a rectangle (outline)
fn render_rect(ctx: &cairo::Context, bounds: &Bounds) {
    ctx.set_line_join(cairo::LineJoin::Miter);
    ctx.rectangle(
        bounds.x as f64,
        bounds.y as f64,
        bounds.width as f64,
        bounds.height as f64,
    );
    let _ = ctx.stroke();
}

/// Render an ellipse inscribed in its box using Cairo's arc with scaling
fn render_ellipse(ctx: &cairo::Context, bounds: &Bounds) {
    // Flat boxes collapse to the segment along the remaining axis
    if bounds.width == 0 || bounds.height == 0 {
        let start = (bounds.x, bounds.y);
        let end = (bounds.x + bounds.width, bounds.y + bounds.height);
        render_line(ctx, &Segment::new(start, end));
        return;
    }

    let (cx, cy) = bounds.center();

    ctx.save().ok();
    ctx.translate(cx, cy);
    ctx.scale(bounds.width as f64 / 2.0, bounds.height as f64 / 2.0);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    let _ = ctx.stroke();
}

/// Render a freehand path, joining segments that share endpoints into one polyline
fn render_path(ctx: &cairo::Context, segments: &[Segment]) {
    if let [segment] = segments {
        if segment.is_degenerate() {
            render_dot(ctx, segment.start);
            return;
        }
    }

    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    let mut pen: Option<(i32, i32)> = None;
    for segment in segments {
        if pen != Some(segment.start) {
            ctx.move_to(segment.start.0 as f64, segment.start.1 as f64);
        }
        ctx.line_to(segment.end.0 as f64, segment.end.1 as f64);
        pen = Some(segment.end);
    }

    let _ = ctx.stroke();
}
