//! Session state shared between the backend and the canvas.

use crate::config::{Action, KeyBinding};
use crate::draw::Color;
use crate::input::{canvas::Canvas, modifiers::Modifiers, tool::ToolKind};
use std::collections::HashMap;

/// Smallest selectable stroke width. Zero is allowed and draws nothing.
pub const MIN_STROKE_WIDTH: f64 = 0.0;
/// Largest selectable stroke width.
pub const MAX_STROKE_WIDTH: f64 = 15.0;

/// Main input state containing all drawing session state.
///
/// Owns the [`Canvas`] together with the keyboard/UI state around it. It
/// processes all keyboard and mouse events, forwards pointer activity to the
/// canvas, and tracks when the window needs to be repainted.
pub struct InputState {
    /// Drawing surface: tools, paint attributes, and committed shapes
    pub canvas: Canvas,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether user requested to close the window
    pub should_exit: bool,
    /// Whether UI chrome (status bar, help) needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the help overlay is currently visible (toggled with F10)
    pub show_help: bool,
    /// Whether the status bar is currently visible (toggled with F12)
    pub show_status_bar: bool,
    /// Window width in pixels (set by backend after configuration)
    pub screen_width: u32,
    /// Window height in pixels (set by backend after configuration)
    pub screen_height: u32,
    /// Whether the left button is currently held
    pub(super) left_pressed: bool,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// Screen dimensions default to 0 and should be updated by the backend
    /// after surface configuration (see `update_screen_dimensions`).
    ///
    /// # Arguments
    /// * `tool` - Initially active tool
    /// * `color` - Initial paint color
    /// * `thickness` - Initial stroke width in pixels (clamped to 0-15)
    /// * `show_status_bar` - Whether the status bar starts visible
    /// * `action_map` - Keybinding action map
    pub fn with_defaults(
        tool: ToolKind,
        color: Color,
        thickness: f64,
        show_status_bar: bool,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            canvas: Canvas::new(
                tool,
                color,
                thickness.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH),
            ),
            modifiers: Modifiers::new(),
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            show_status_bar,
            screen_width: 0,
            screen_height: 0,
            left_pressed: false,
            action_map,
        }
    }

    /// Updates screen dimensions after backend configuration.
    ///
    /// # Arguments
    /// * `width` - Window width in pixels
    /// * `height` - Window height in pixels
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        if (self.screen_width, self.screen_height) != (width, height) {
            self.screen_width = width;
            self.screen_height = height;
            self.needs_redraw = true;
        }
    }

    /// Whether anything (canvas or UI chrome) changed since the last frame.
    pub fn redraw_pending(&self) -> bool {
        self.needs_redraw || self.canvas.needs_redraw
    }

    /// Clears the redraw flags once a frame has been presented.
    pub fn mark_rendered(&mut self) {
        self.needs_redraw = false;
        self.canvas.needs_redraw = false;
    }

    /// Whether a drag with the left button is in progress.
    pub fn is_left_pressed(&self) -> bool {
        self.left_pressed
    }

    /// Look up an action for the given key and modifiers.
    ///
    /// Symbols typed with Shift (e.g. `+` or `_`) also match bindings that
    /// omit Shift, since the shifted character already encodes it.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        let Modifiers { ctrl, shift, alt } = self.modifiers;
        let lookup = |shift: bool| {
            self.action_map
                .iter()
                .find(|(binding, _)| binding.matches(key_str, ctrl, shift, alt))
                .map(|(_, action)| *action)
        };

        lookup(shift).or_else(|| {
            let is_symbol = key_str.chars().count() == 1
                && key_str.chars().all(|c| !c.is_alphanumeric());
            if shift && is_symbol { lookup(false) } else { None }
        })
    }

    /// Adjusts the stroke width by a delta, clamping to 0-15.
    ///
    /// Triggers a redraw to update the status bar and the live preview.
    pub fn adjust_thickness(&mut self, delta: f64) {
        let width = (self.canvas.stroke_width() + delta).clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        if width != self.canvas.stroke_width() {
            self.canvas.set_stroke_width(width);
            self.needs_redraw = true;
        }
        log::debug!("Stroke width adjusted to {:.0}px", width);
    }

    /// Changes the paint color used for the next shape.
    pub fn set_color(&mut self, color: Color) {
        self.canvas.set_color(color);
        self.needs_redraw = true;
        log::debug!("Color set to {}", crate::util::color_to_name(&color));
    }
}
