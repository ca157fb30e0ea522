//! Drawing tools.
//!
//! Every tool owns a [`CursorState`] and turns it into a [`Geometry`] preview.
//! Tools are long-lived: one instance per [`ToolKind`] lives in a [`ToolBox`]
//! for the whole session and is re-armed on each press instead of rebuilt.

mod cursor;

pub use cursor::{CursorState, OFF_CANVAS};

use crate::draw::{Bounds, Geometry, Segment};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drawing tool selection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Straight line from press point to cursor
    Line,
    /// Freehand drawing - follows the pointer path
    Pencil,
    /// Rectangle outline - from corner to corner
    Rectangle,
    /// Ellipse outline inscribed in the dragged box
    Ellipse,
}

impl ToolKind {
    /// All tools in toolbar order.
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Line,
        ToolKind::Pencil,
        ToolKind::Rectangle,
        ToolKind::Ellipse,
    ];

    /// Human-readable tool name shown in the status bar.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Line => "Line Tool",
            ToolKind::Pencil => "Pencil Tool",
            ToolKind::Rectangle => "Rectangle Tool",
            ToolKind::Ellipse => "Ellipse Tool",
        }
    }

    fn index(self) -> usize {
        match self {
            ToolKind::Line => 0,
            ToolKind::Pencil => 1,
            ToolKind::Rectangle => 2,
            ToolKind::Ellipse => 3,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Variant-specific accumulation state.
#[derive(Debug, Clone)]
enum Variant {
    /// Segments appended on every move while enabled; emptied on disable.
    Pencil { path: Vec<Segment> },
    Line,
    Rectangle,
    Ellipse,
}

/// A stateful cursor tracker that produces a shape preview.
#[derive(Debug, Clone)]
pub struct Tool {
    cursor: CursorState,
    variant: Variant,
}

impl Tool {
    /// Creates a disabled tool of the given kind with its cursor off-canvas.
    pub fn new(kind: ToolKind) -> Self {
        let variant = match kind {
            ToolKind::Line => Variant::Line,
            ToolKind::Pencil => Variant::Pencil { path: Vec::new() },
            ToolKind::Rectangle => Variant::Rectangle,
            ToolKind::Ellipse => Variant::Ellipse,
        };
        Self {
            cursor: CursorState::new(),
            variant,
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self.variant {
            Variant::Pencil { .. } => ToolKind::Pencil,
            Variant::Line => ToolKind::Line,
            Variant::Rectangle => ToolKind::Rectangle,
            Variant::Ellipse => ToolKind::Ellipse,
        }
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn is_enabled(&self) -> bool {
        self.cursor.is_enabled()
    }

    /// Records the drag start point (also moves `current` there).
    pub fn set_origin(&mut self, x: i32, y: i32) {
        self.cursor.set_origin(x, y);
    }

    /// Moves the cursor. The pencil extends its path while enabled.
    pub fn set_current(&mut self, x: i32, y: i32) {
        self.cursor.set_current(x, y);

        if let Variant::Pencil { path } = &mut self.variant {
            if self.cursor.is_enabled() {
                path.push(Segment::new(self.cursor.previous(), self.cursor.current()));
            }
        }
    }

    /// Enables or disables the tool. Disabling discards the pencil's path.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.cursor.set_enabled(enabled);

        if !enabled {
            if let Variant::Pencil { path } = &mut self.variant {
                path.clear();
            }
        }
    }

    /// Returns the geometry for the current cursor state.
    ///
    /// Disabled tools always return [`Geometry::Empty`]. Repeated calls without
    /// intervening updates return equal geometry.
    pub fn shape(&self) -> Geometry {
        if !self.cursor.is_enabled() {
            return Geometry::Empty;
        }

        let origin = self.cursor.origin();
        let current = self.cursor.current();

        match &self.variant {
            // A click without movement still leaves a dot at the press point
            Variant::Pencil { path } if path.is_empty() => {
                Geometry::Path(vec![Segment::new(origin, origin)])
            }
            Variant::Pencil { path } => Geometry::Path(path.clone()),
            Variant::Line => Geometry::Line(Segment::new(origin, current)),
            Variant::Rectangle => Geometry::Rect(Bounds::from_corners(origin, current)),
            Variant::Ellipse => Geometry::Ellipse(Bounds::from_corners(origin, current)),
        }
    }
}

/// One persistent tool per [`ToolKind`].
#[derive(Debug, Clone)]
pub struct ToolBox {
    tools: [Tool; 4],
}

impl Default for ToolBox {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolBox {
    pub fn new() -> Self {
        Self {
            tools: ToolKind::ALL.map(Tool::new),
        }
    }

    pub fn get(&self, kind: ToolKind) -> &Tool {
        &self.tools[kind.index()]
    }

    pub fn get_mut(&mut self, kind: ToolKind) -> &mut Tool {
        &mut self.tools[kind.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragged(kind: ToolKind, origin: (i32, i32), current: (i32, i32)) -> Tool {
        let mut tool = Tool::new(kind);
        tool.set_origin(origin.0, origin.1);
        tool.set_current(origin.0, origin.1);
        tool.set_enabled(true);
        tool.set_current(current.0, current.1);
        tool
    }

    #[test]
    fn rectangle_and_ellipse_normalize_all_drag_directions() {
        let cases = [
            ((30, 40), Bounds { x: 10, y: 10, width: 20, height: 30 }),
            ((-10, 40), Bounds { x: -10, y: 10, width: 20, height: 30 }),
            ((30, -20), Bounds { x: 10, y: -20, width: 20, height: 30 }),
            ((-10, -20), Bounds { x: -10, y: -20, width: 20, height: 30 }),
        ];

        for (current, bounds) in cases {
            let rect = dragged(ToolKind::Rectangle, (10, 10), current);
            assert_eq!(rect.shape(), Geometry::Rect(bounds), "rectangle to {current:?}");

            let ellipse = dragged(ToolKind::Ellipse, (10, 10), current);
            assert_eq!(ellipse.shape(), Geometry::Ellipse(bounds), "ellipse to {current:?}");
        }
    }

    #[test]
    fn line_click_without_drag_is_zero_length() {
        let mut tool = Tool::new(ToolKind::Line);
        tool.set_origin(5, 5);
        tool.set_current(5, 5);
        tool.set_enabled(true);

        match tool.shape() {
            Geometry::Line(segment) => {
                assert!(segment.is_degenerate());
                assert_eq!(segment.start, (5, 5));
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn line_follows_cursor() {
        let tool = dragged(ToolKind::Line, (1, 2), (30, 40));
        assert_eq!(
            tool.shape(),
            Geometry::Line(Segment::new((1, 2), (30, 40)))
        );
    }

    #[test]
    fn pencil_accumulates_connected_segments() {
        let mut tool = Tool::new(ToolKind::Pencil);
        tool.set_enabled(true);
        tool.set_origin(0, 0);
        tool.set_current(1, 1);
        tool.set_current(2, 2);

        assert_eq!(
            tool.shape(),
            Geometry::Path(vec![
                Segment::new((0, 0), (1, 1)),
                Segment::new((1, 1), (2, 2)),
            ])
        );
    }

    #[test]
    fn pencil_path_resets_between_sessions() {
        let mut tool = Tool::new(ToolKind::Pencil);
        tool.set_enabled(true);
        tool.set_origin(0, 0);
        tool.set_current(1, 1);
        tool.set_current(2, 2);

        tool.set_enabled(false);
        tool.set_enabled(true);
        tool.set_origin(0, 0);

        assert_eq!(
            tool.shape(),
            Geometry::Path(vec![Segment::new((0, 0), (0, 0))])
        );

        tool.set_current(3, 3);
        assert_eq!(
            tool.shape(),
            Geometry::Path(vec![Segment::new((0, 0), (3, 3))])
        );
    }

    #[test]
    fn pencil_ignores_moves_while_disabled() {
        let mut tool = Tool::new(ToolKind::Pencil);
        tool.set_origin(0, 0);
        tool.set_current(4, 4);
        tool.set_enabled(true);
        assert_eq!(
            tool.shape(),
            Geometry::Path(vec![Segment::new((0, 0), (0, 0))])
        );
    }

    #[test]
    fn pencil_click_without_drag_is_a_dot() {
        let mut tool = Tool::new(ToolKind::Pencil);
        tool.set_origin(7, 9);
        tool.set_current(7, 9);
        tool.set_enabled(true);

        match tool.shape() {
            Geometry::Path(segments) => {
                assert_eq!(segments.len(), 1);
                assert!(segments[0].is_degenerate());
                assert_eq!(segments[0].start, (7, 9));
            }
            other => panic!("expected a path, got {other:?}"),
        }
        assert_eq!(tool.shape(), tool.shape());
    }

    #[test]
    fn disabled_tools_yield_empty_geometry() {
        for kind in ToolKind::ALL {
            let mut tool = dragged(kind, (0, 0), (10, 10));
            assert!(!tool.shape().is_empty(), "{kind} should draw while enabled");
            tool.set_enabled(false);
            assert_eq!(tool.shape(), Geometry::Empty, "{kind} should be empty");
        }
    }

    #[test]
    fn shape_is_idempotent() {
        for kind in ToolKind::ALL {
            let tool = dragged(kind, (3, 7), (12, -4));
            assert_eq!(tool.shape(), tool.shape());
        }
    }

    #[test]
    fn untouched_tool_geometry_stays_off_canvas() {
        let mut tool = Tool::new(ToolKind::Rectangle);
        assert_eq!(tool.shape(), Geometry::Empty);

        tool.set_enabled(true);
        assert_eq!(
            tool.shape(),
            Geometry::Rect(Bounds::from_corners(OFF_CANVAS, OFF_CANVAS))
        );
    }

    #[test]
    fn toolbox_keeps_one_persistent_tool_per_kind() {
        let mut toolbox = ToolBox::new();
        toolbox.get_mut(ToolKind::Ellipse).set_origin(9, 9);

        for kind in ToolKind::ALL {
            assert_eq!(toolbox.get(kind).kind(), kind);
        }
        assert_eq!(toolbox.get(ToolKind::Ellipse).cursor().origin(), (9, 9));
        assert_eq!(toolbox.get(ToolKind::Line).cursor().origin(), OFF_CANVAS);
    }

    #[test]
    fn display_uses_tool_names() {
        assert_eq!(ToolKind::Pencil.to_string(), "Pencil Tool");
        assert_eq!(ToolKind::Ellipse.to_string(), "Ellipse Tool");
    }
}
