//! Pointer position tracking shared by every tool.

use crate::draw::Point;

/// Position every coordinate holds before the first press.
///
/// Far outside the visible surface, so geometry computed before any interaction
/// never shows up as an artifact near the origin.
pub const OFF_CANVAS: Point = (-100, -100);

/// Cursor state held by each tool.
///
/// `previous` always holds the `current` value from before the latest
/// [`set_current`](Self::set_current) call. `enabled` is only true between a
/// pointer press and the matching release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorState {
    origin: Point,
    current: Point,
    previous: Point,
    enabled: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorState {
    /// Creates a disabled cursor parked off-canvas.
    pub fn new() -> Self {
        Self {
            origin: OFF_CANVAS,
            current: OFF_CANVAS,
            previous: OFF_CANVAS,
            enabled: false,
        }
    }

    /// Records the drag start and snaps `current` to it.
    ///
    /// `previous` is left alone; the next `set_current` shifts the new origin into it.
    pub fn set_origin(&mut self, x: i32, y: i32) {
        self.origin = (x, y);
        self.current = (x, y);
    }

    /// Moves the cursor, remembering where it was.
    pub fn set_current(&mut self, x: i32, y: i32) {
        self.previous = self.current;
        self.current = (x, y);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn current(&self) -> Point {
        self.current
    }

    pub fn previous(&self) -> Point {
        self.previous
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
