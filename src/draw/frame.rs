//! Frame container for the committed shapes on the canvas.

use super::shape::CommittedShape;

/// Ordered collection of committed shapes.
///
/// Insertion order is paint order: the first shape is the bottom layer and the
/// last one is drawn on top. Shapes are only ever appended or cleared in bulk.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    shapes: Vec<CommittedShape>,
}

impl Frame {
    /// Creates a new empty frame with no shapes.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds a new shape to the frame (drawn on top of existing shapes).
    pub fn push(&mut self, shape: CommittedShape) {
        self.shapes.push(shape);
    }

    /// Removes all shapes from the frame, clearing the canvas.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[CommittedShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{
        BLUE, RED,
        geometry::{Bounds, Geometry, Segment},
    };

    #[test]
    fn push_keeps_insertion_order() {
        let mut frame = Frame::new();
        frame.push(CommittedShape::new(
            Geometry::Line(Segment::new((0, 0), (1, 1))),
            2.0,
            RED,
        ));
        frame.push(CommittedShape::new(
            Geometry::Rect(Bounds::from_corners((0, 0), (4, 4))),
            3.0,
            BLUE,
        ));

        assert_eq!(frame.len(), 2);
        assert_eq!(frame.shapes()[0].color(), RED);
        assert_eq!(frame.shapes()[1].color(), BLUE);
    }

    #[test]
    fn clear_removes_everything() {
        let mut frame = Frame::new();
        frame.push(CommittedShape::new(Geometry::Empty, 1.0, RED));
        frame.clear();
        assert!(frame.is_empty());
    }
}
