use crate::draw::CommittedShape;
use log::debug;

use super::Canvas;

impl Canvas {
    /// Starts a stroke at `(x, y)`.
    ///
    /// Re-arms the active tool at the press point and enables it only when the
    /// stroke width is positive; a zero-width press leaves the tool disabled so
    /// the following moves and release are ignored.
    pub fn on_pointer_down(&mut self, x: i32, y: i32) {
        let width = self.stroke_width;
        let tool = self.tool_mut();
        tool.set_origin(x, y);
        tool.set_current(x, y);

        if width > 0.0 {
            tool.set_enabled(true);
            self.needs_redraw = true;
        } else {
            debug!("Ignoring press at ({}, {}): stroke width {:.1}", x, y, width);
            tool.set_enabled(false);
        }
    }

    /// Updates the in-progress stroke.
    ///
    /// Moves outside a press/release bracket are dropped without touching
    /// state or requesting a redraw.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        let tool = self.tool_mut();
        if !tool.is_enabled() {
            return;
        }

        tool.set_current(x, y);
        self.needs_redraw = true;
    }

    /// Finishes the stroke and commits the tool's shape.
    ///
    /// The committed shape freezes the current color and stroke width. Nothing
    /// is committed when the tool was never enabled for this stroke.
    pub fn on_pointer_up(&mut self, x: i32, y: i32) {
        let width = self.stroke_width;
        let color = self.color;
        let tool = self.tool_mut();

        if !tool.is_enabled() {
            debug!("Release at ({}, {}) without an active stroke", x, y);
            return;
        }

        let shape = CommittedShape::new(tool.shape(), width, color);
        tool.set_enabled(false);

        self.frame.push(shape);
        self.clear_enabled = true;
        self.needs_redraw = true;
        debug!(
            "Committed {} shape #{} at ({}, {})",
            self.active_tool,
            self.frame.len(),
            x,
            y
        );
    }
}
