use crate::input::events::MouseButton;
use log::debug;

use super::InputState;

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// Only the left button draws: it starts a stroke with the active tool at
    /// the press point. Other buttons are ignored.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            debug!("Ignoring {:?} button press", button);
            return;
        }

        self.left_pressed = true;
        self.canvas.on_pointer_down(x, y);
    }

    /// Processes mouse motion events.
    ///
    /// Motion is forwarded to the canvas only while the left button is held,
    /// so hovering never moves a tool cursor.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        if self.left_pressed {
            self.canvas.on_pointer_move(x, y);
        }
    }

    /// Processes mouse button release events.
    ///
    /// Releasing the left button finishes the stroke and commits the shape.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left || !self.left_pressed {
            return;
        }

        self.left_pressed = false;
        self.canvas.on_pointer_up(x, y);
    }

    /// Processes scroll wheel steps: scrolling up thickens, down thins.
    pub fn on_scroll(&mut self, steps: i32) {
        if steps != 0 {
            self.adjust_thickness(-f64::from(steps));
        }
    }
}
