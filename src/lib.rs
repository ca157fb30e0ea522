//! Library exports for the magic-paint subsystems.
//!
//! The binary is a thin CLI over these modules; the config types are also used
//! by the schema dump tool so both share validation and serialization code.

pub mod backend;
pub mod config;
pub mod draw;
pub mod input;
pub mod ui;
pub mod util;

pub use config::Config;
