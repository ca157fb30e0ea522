use anyhow::Result;

use crate::draw::Color;
use crate::input::ToolKind;

pub mod wayland;

/// Command-line overrides applied on top of the loaded configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupOptions {
    /// Tool active when the window opens
    pub tool: Option<ToolKind>,
    /// Initial paint color
    pub color: Option<Color>,
    /// Initial stroke width in pixels
    pub thickness: Option<f64>,
}

/// Run Wayland backend with full event loop
///
/// # Arguments
/// * `options` - Startup overrides (tool, color, thickness) from the CLI
pub fn run_wayland(options: StartupOptions) -> Result<()> {
    let mut backend = wayland::WaylandBackend::new(options);
    backend.run()
}
