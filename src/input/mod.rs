//! Input handling and drawing state.
//!
//! This module translates backend keyboard and mouse events into canvas
//! operations. [`InputState`] owns the [`Canvas`] plus the keyboard and UI
//! state around it; the canvas drives the active [`Tool`].

pub mod canvas;
pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use state::{InputState, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
pub use tool::{Tool, ToolKind};
