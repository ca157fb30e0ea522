use crate::draw::{Painter, render_shapes};

use super::Canvas;

impl Canvas {
    /// Repaints the canvas contents.
    ///
    /// Committed shapes go first, in insertion order and each with its own
    /// stroke and color. The active tool's live shape goes last using the
    /// current paint attributes. Does not reset [`needs_redraw`](Canvas::needs_redraw);
    /// the host does that once the frame is presented.
    pub fn redraw<P: Painter + ?Sized>(&self, painter: &mut P) {
        render_shapes(painter, self.frame.shapes());
        painter.stroke_geometry(&self.tool().shape(), self.color, self.stroke_width);
    }
}
