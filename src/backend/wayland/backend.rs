// Coordinates backend startup/shutdown and drives the event loop while delegating
// rendering & protocol state to `WaylandState` and its handler modules.
use anyhow::{Context, Result};
use log::{debug, info, warn};
use smithay_client_toolkit::{
    compositor::CompositorState,
    registry::RegistryState,
    seat::SeatState,
    shell::{
        WaylandSurface,
        xdg::{XdgShell, window::WindowDecorations},
    },
    shm::Shm,
};
use wayland_client::{Connection, globals::registry_queue_init};

use super::state::WaylandState;
use crate::{
    backend::StartupOptions,
    config::{Config, MIN_CANVAS_SIZE},
    input::InputState,
};

const WINDOW_TITLE: &str = "Magic Paint";
const APP_ID: &str = "magic-paint";
const MAX_RENDER_FAILURES: u32 = 10;

/// Builds the drawing session from config defaults and CLI overrides.
///
/// # Errors
/// Returns an error if the configured keybindings are invalid (empty,
/// unparsable, or bound to two actions).
pub fn build_input_state(config: &Config, options: &StartupOptions) -> Result<InputState> {
    let action_map = config
        .keybindings
        .build_action_map()
        .context("Invalid keybinding configuration")?;

    let tool = options.tool.unwrap_or(config.drawing.default_tool);
    let color = options
        .color
        .unwrap_or_else(|| config.drawing.default_color.to_color());
    let thickness = options
        .thickness
        .unwrap_or(config.drawing.default_thickness);

    debug!(
        "Initial tool {}, color {}, thickness {:.1}px",
        tool.name(),
        crate::util::color_to_name(&color),
        thickness
    );

    Ok(InputState::with_defaults(
        tool,
        color,
        thickness,
        config.ui.show_status_bar,
        action_map,
    ))
}

/// Wayland backend state
pub struct WaylandBackend {
    options: StartupOptions,
}

impl WaylandBackend {
    pub fn new(options: StartupOptions) -> Self {
        Self { options }
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting Wayland backend");

        // Connect to Wayland compositor
        let conn =
            Connection::connect_to_env().context("Failed to connect to Wayland compositor")?;
        debug!("Connected to Wayland display");

        // Initialize registry and event queue
        let (globals, mut event_queue) =
            registry_queue_init(&conn).context("Failed to initialize Wayland registry")?;
        let qh = event_queue.handle();

        // Bind global interfaces
        let compositor_state =
            CompositorState::bind(&globals, &qh).context("wl_compositor not available")?;
        debug!("Bound compositor");

        let xdg_shell = XdgShell::bind(&globals, &qh).context("xdg_wm_base not available")?;
        debug!("Bound xdg shell");

        let shm = Shm::bind(&globals, &qh).context("wl_shm not available")?;
        debug!("Bound shared memory");

        let seat_state = SeatState::new(&globals, &qh);
        debug!("Initialized seat state");

        let registry_state = RegistryState::new(&globals);

        // Load configuration
        let config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config: {:#}. Using defaults.", e);
                Config::default()
            }
        };
        info!("Configuration loaded");
        debug!("  Color: {:?}", config.drawing.default_color);
        debug!("  Thickness: {:.1}px", config.drawing.default_thickness);
        debug!("  Tool: {:?}", config.drawing.default_tool);
        debug!(
            "  Canvas: {}x{}",
            config.canvas.width, config.canvas.height
        );
        debug!("  Buffer count: {}", config.performance.buffer_count);
        debug!("  VSync: {}", config.performance.enable_vsync);
        debug!(
            "  Status bar: {} @ {:?}",
            config.ui.show_status_bar, config.ui.status_bar_position
        );

        let input_state = build_input_state(&config, &self.options)?;
        let (initial_width, initial_height) = (config.canvas.width, config.canvas.height);

        // Create application state
        let mut state = WaylandState::new(
            registry_state,
            compositor_state,
            xdg_shell,
            shm,
            seat_state,
            config,
            input_state,
        );

        // Create the toplevel window
        info!("Creating xdg window");
        let wl_surface = state.compositor_state.create_surface(&qh);
        let window =
            state
                .xdg_shell
                .create_window(wl_surface, WindowDecorations::RequestServer, &qh);
        window.set_title(WINDOW_TITLE);
        window.set_app_id(APP_ID);
        window.set_min_size(Some((MIN_CANVAS_SIZE, MIN_CANVAS_SIZE)));

        // The compositor may override this size in its first configure
        state.surface.update_dimensions(initial_width, initial_height);

        // Commit the surface
        window.commit();

        state.surface.set_window(window);
        info!("Window created");

        // Track consecutive render failures for error recovery
        let mut consecutive_render_failures = 0u32;

        // Main event loop
        let mut loop_error: Option<anyhow::Error> = None;
        loop {
            // Check if we should exit before blocking
            if state.input_state.should_exit {
                info!("Exit requested, breaking event loop");
                break;
            }

            // Dispatch all pending events (blocking) but check should_exit after each batch
            match event_queue.blocking_dispatch(&mut state) {
                Ok(_) => {
                    if state.input_state.should_exit {
                        info!("Exit requested after dispatch, breaking event loop");
                        break;
                    }
                }
                Err(e) => {
                    warn!("Event queue error: {}", e);
                    loop_error = Some(anyhow::anyhow!("Wayland event queue error: {}", e));
                    break;
                }
            }

            // Render if configured and needs redraw, but only if no frame callback pending
            // This throttles rendering to display refresh rate (when vsync is enabled)
            let redraw_pending = state.input_state.redraw_pending();
            let can_render = state.surface.is_configured()
                && redraw_pending
                && (!state.surface.frame_callback_pending()
                    || !state.config.performance.enable_vsync);

            if can_render {
                debug!(
                    "Main loop: redraw pending, frame_callback_pending={}, triggering render",
                    state.surface.frame_callback_pending()
                );
                match state.render(&qh) {
                    Ok(()) => {
                        consecutive_render_failures = 0;
                        state.input_state.mark_rendered();
                        if state.config.performance.enable_vsync {
                            state.surface.set_frame_callback_pending(true);
                        }
                    }
                    Err(e) => {
                        consecutive_render_failures += 1;
                        warn!(
                            "Rendering error (attempt {}/{}): {:#}",
                            consecutive_render_failures, MAX_RENDER_FAILURES, e
                        );

                        if consecutive_render_failures >= MAX_RENDER_FAILURES {
                            return Err(anyhow::anyhow!(
                                "Too many consecutive render failures ({}), exiting: {}",
                                consecutive_render_failures,
                                e
                            ));
                        }

                        // Clear redraw flags to avoid infinite error loop
                        state.input_state.mark_rendered();
                    }
                }
            } else if redraw_pending && state.surface.frame_callback_pending() {
                debug!("Main loop: Skipping render - frame callback already pending");
            }
        }

        info!("Wayland backend exiting");

        match loop_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
