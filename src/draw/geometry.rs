//! Tool-produced geometry: the outline a tool wants painted, without paint attributes.

/// Screen-space point in surface pixels.
pub type Point = (i32, i32);

/// Straight segment between two points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns true when both endpoints coincide (renders as a dot).
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Axis-aligned box with a top-left corner and non-negative extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Builds the box spanned by two opposite corners, whichever way the drag went.
    ///
    /// The top-left corner is the component-wise minimum and the extent is the
    /// absolute difference, so all four drag directions produce the same box.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.0.min(b.0),
            y: a.1.min(b.1),
            width: (b.0 - a.0).abs(),
            height: (b.1 - a.1).abs(),
        }
    }

    /// Center of the box in floating-point coordinates.
    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }
}

/// Shape outline produced by a tool.
///
/// `Empty` is the "nothing to draw" value returned by disabled tools.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Geometry {
    #[default]
    Empty,
    /// Straight line from the drag origin to the cursor
    Line(Segment),
    /// Rectangle outline inside a normalized box
    Rect(Bounds),
    /// Ellipse outline inscribed in a normalized box
    Ellipse(Bounds),
    /// Freehand path built from connected segments
    Path(Vec<Segment>),
}

impl Geometry {
    /// Returns true when there is nothing to paint.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Empty => true,
            Geometry::Path(segments) => segments.is_empty(),
            _ => false,
        }
    }
}
