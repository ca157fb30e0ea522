//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types used by the canvas:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Geometry`]: Outline produced by a tool (line, rectangle, ellipse, path)
//! - [`CommittedShape`]: Geometry frozen together with its color and stroke width
//! - [`Frame`]: Ordered container for all committed shapes
//! - [`Painter`] and the Cairo rendering functions

pub mod color;
pub mod frame;
pub mod geometry;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::Frame;
pub use geometry::{Bounds, Geometry, Point, Segment};
pub use render::{Painter, render_background, render_geometry, render_shapes};
pub use shape::CommittedShape;

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW};
