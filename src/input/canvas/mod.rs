//! The drawing area: active tool, paint attributes, and committed shapes.

mod pointer;
mod render;
#[cfg(test)]
mod tests;

use crate::draw::{Color, CommittedShape, Frame};
use crate::input::tool::{Tool, ToolBox, ToolKind};
use log::debug;

/// Drawing surface state.
///
/// Owns one persistent tool per kind (with exactly one of them active), the
/// active color and stroke width, and the ordered list of committed shapes.
/// Pointer callbacks drive the active tool; [`redraw`](Self::redraw) replays
/// everything onto a [`Painter`](crate::draw::Painter).
#[derive(Debug)]
pub struct Canvas {
    tools: ToolBox,
    active_tool: ToolKind,
    color: Color,
    stroke_width: f64,
    frame: Frame,
    clear_enabled: bool,
    /// Whether the host should repaint on its next opportunity
    pub needs_redraw: bool,
}

impl Canvas {
    /// Creates an empty canvas with the given initial tool and paint attributes.
    pub fn new(tool: ToolKind, color: Color, stroke_width: f64) -> Self {
        Self {
            tools: ToolBox::new(),
            active_tool: tool,
            color,
            stroke_width,
            frame: Frame::new(),
            clear_enabled: false,
            needs_redraw: true,
        }
    }

    /// Makes `kind` the active tool.
    ///
    /// Committed shapes are unaffected. A still-enabled outgoing tool is
    /// disabled so a half-finished drag cannot reappear later.
    pub fn set_tool(&mut self, kind: ToolKind) {
        if kind == self.active_tool {
            return;
        }

        let outgoing = self.tools.get_mut(self.active_tool);
        if outgoing.is_enabled() {
            debug!("Abandoning in-progress {} stroke", outgoing.kind());
            outgoing.set_enabled(false);
        }

        debug!("Active tool: {}", kind);
        self.active_tool = kind;
        self.needs_redraw = true;
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    /// The active tool instance.
    pub fn tool(&self) -> &Tool {
        self.tools.get(self.active_tool)
    }

    pub(super) fn tool_mut(&mut self) -> &mut Tool {
        self.tools.get_mut(self.active_tool)
    }

    /// Sets the color used by the next committed shape (and the live preview).
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Current paint color, e.g. for seeding a color picker.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the stroke width used by the next committed shape (and the live preview).
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Committed shapes in paint order.
    pub fn shapes(&self) -> &[CommittedShape] {
        self.frame.shapes()
    }

    /// Whether there is anything for "clear" to remove.
    pub fn is_clear_enabled(&self) -> bool {
        self.clear_enabled
    }

    /// Removes every committed shape.
    ///
    /// The active tool keeps its cursor and enabled state.
    pub fn clear(&mut self) {
        debug!("Clearing {} shapes", self.frame.len());
        self.frame.clear();
        self.clear_enabled = false;
        self.needs_redraw = true;
    }
}
