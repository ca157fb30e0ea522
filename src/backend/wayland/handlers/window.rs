// Reacts to xdg toplevel configure/close events: sizes the buffer pool and ends the session.
use log::{debug, info};
use smithay_client_toolkit::shell::xdg::window::{Window, WindowConfigure, WindowHandler};
use wayland_client::{Connection, QueueHandle};

use super::super::state::WaylandState;

impl WindowHandler for WaylandState {
    fn request_close(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _window: &Window) {
        info!("Window close requested by compositor");
        self.input_state.should_exit = true;
    }

    fn configure(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _window: &Window,
        configure: WindowConfigure,
        _serial: u32,
    ) {
        // A missing dimension leaves the choice to us: keep the current size,
        // which starts at the configured canvas size.
        let (new_width, new_height) = configure.new_size;
        let width = new_width.map_or(self.surface.width(), |w| w.get());
        let height = new_height.map_or(self.surface.height(), |h| h.get());
        debug!(
            "Window configured: {}x{} (suggested {:?}x{:?})",
            width, height, new_width, new_height
        );

        if self.surface.update_dimensions(width, height) {
            info!("Window size is now {}x{}", width, height);
        }
        self.input_state.update_screen_dimensions(width, height);

        if !self.surface.is_configured() {
            self.surface.set_configured(true);
            self.input_state.needs_redraw = true;
        }
    }
}
