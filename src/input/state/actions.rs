use crate::config::Action;
use crate::draw::color::{BLACK, BLUE, GREEN, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW};
use crate::input::{events::Key, tool::ToolKind};
use log::debug;

use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// Tracks modifier keys, then resolves the key (with modifiers) through
    /// the keybinding map and runs the bound action, if any.
    pub fn on_key_press(&mut self, key: Key) {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Handle an action triggered by a keybinding.
    pub(super) fn handle_action(&mut self, action: Action) {
        debug!("Action: {:?}", action);
        match action {
            Action::Exit => {
                self.should_exit = true;
            }
            Action::ClearCanvas => {
                if self.canvas.is_clear_enabled() {
                    self.canvas.clear();
                } else {
                    debug!("Nothing to clear");
                }
            }
            Action::SelectLine => self.canvas.set_tool(ToolKind::Line),
            Action::SelectPencil => self.canvas.set_tool(ToolKind::Pencil),
            Action::SelectRectangle => self.canvas.set_tool(ToolKind::Rectangle),
            Action::SelectEllipse => self.canvas.set_tool(ToolKind::Ellipse),
            Action::IncreaseThickness => self.adjust_thickness(1.0),
            Action::DecreaseThickness => self.adjust_thickness(-1.0),
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.needs_redraw = true;
            }
            Action::ToggleStatusBar => {
                self.show_status_bar = !self.show_status_bar;
                self.needs_redraw = true;
            }
            Action::SetColorPurple => self.set_color(PURPLE),
            Action::SetColorRed => self.set_color(RED),
            Action::SetColorGreen => self.set_color(GREEN),
            Action::SetColorBlue => self.set_color(BLUE),
            Action::SetColorYellow => self.set_color(YELLOW),
            Action::SetColorOrange => self.set_color(ORANGE),
            Action::SetColorPink => self.set_color(PINK),
            Action::SetColorWhite => self.set_color(WHITE),
            Action::SetColorBlack => self.set_color(BLACK),
        }
    }

    /// Processes a key release event.
    ///
    /// Only tracks modifier key releases to update the modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }
}
