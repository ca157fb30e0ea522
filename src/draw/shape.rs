//! Committed shape records.

use super::color::Color;
use super::geometry::Geometry;

/// A finished shape captured when the pointer is released.
///
/// Stores its own color and stroke width so later changes to the active paint
/// attributes never alter shapes already on the canvas. Fields are private and
/// there is no mutating API: once built, a shape is only read.
#[derive(Clone, Debug, PartialEq)]
pub struct CommittedShape {
    geometry: Geometry,
    stroke_width: f64,
    color: Color,
}

impl CommittedShape {
    /// Captures a geometry together with the paint attributes in effect right now.
    pub fn new(geometry: Geometry, stroke_width: f64, color: Color) -> Self {
        Self {
            geometry,
            stroke_width,
            color,
        }
    }

    /// Outline to paint.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Stroke width in pixels at commit time.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Color at commit time.
    pub fn color(&self) -> Color {
        self.color
    }
}
