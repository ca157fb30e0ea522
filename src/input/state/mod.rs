mod actions;
mod core;
mod mouse;
#[cfg(test)]
mod tests;

pub use core::{InputState, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH};
