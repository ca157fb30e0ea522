// Wayland host: an xdg toplevel window painted through shared-memory Cairo buffers.
mod backend;
mod handlers;
mod state;
mod surface;

pub use backend::{WaylandBackend, build_input_state};
