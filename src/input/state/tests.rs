use super::*;
use crate::config::KeybindingsConfig;
use crate::draw::Geometry;
use crate::draw::color::{BLUE, GREEN, PURPLE};
use crate::input::{Key, MouseButton, ToolKind};

fn create_test_input_state() -> InputState {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    let mut state = InputState::with_defaults(ToolKind::Line, PURPLE, 5.0, true, action_map);
    state.mark_rendered();
    state
}

fn drag(state: &mut InputState, from: (i32, i32), to: (i32, i32)) {
    state.on_mouse_press(MouseButton::Left, from.0, from.1);
    state.on_mouse_motion(to.0, to.1);
    state.on_mouse_release(MouseButton::Left, to.0, to.1);
}

#[test]
fn new_state_requests_first_frame() {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    let state = InputState::with_defaults(ToolKind::Pencil, PURPLE, 5.0, false, action_map);
    assert!(state.redraw_pending());
    assert_eq!(state.canvas.active_tool(), ToolKind::Pencil);
    assert!(!state.show_status_bar);
}

#[test]
fn initial_thickness_is_clamped() {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    let state = InputState::with_defaults(ToolKind::Line, PURPLE, 42.0, true, action_map);
    assert_eq!(state.canvas.stroke_width(), MAX_STROKE_WIDTH);
}

#[test]
fn mouse_drag_creates_shapes_for_each_tool() {
    let mut state = create_test_input_state();

    for (i, key) in ['1', '2', '3', '4'].into_iter().enumerate() {
        state.on_key_press(Key::Char(key));
        drag(&mut state, (10, 10), (40, 30));
        assert_eq!(state.canvas.shapes().len(), i + 1);
    }

    let shapes = state.canvas.shapes();
    assert!(matches!(shapes[0].geometry(), Geometry::Line(_)));
    assert!(matches!(shapes[1].geometry(), Geometry::Path(_)));
    assert!(matches!(shapes[2].geometry(), Geometry::Rect(_)));
    assert!(matches!(shapes[3].geometry(), Geometry::Ellipse(_)));
    assert_eq!(state.canvas.active_tool(), ToolKind::Ellipse);
}

#[test]
fn hover_motion_is_not_forwarded() {
    let mut state = create_test_input_state();
    let before = *state.canvas.tool().cursor();

    state.on_mouse_motion(100, 100);

    assert_eq!(*state.canvas.tool().cursor(), before);
    assert!(!state.redraw_pending());
}

#[test]
fn non_left_buttons_do_not_draw() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Right, 0, 0);
    state.on_mouse_motion(20, 20);
    state.on_mouse_release(MouseButton::Right, 20, 20);
    state.on_mouse_press(MouseButton::Middle, 0, 0);
    state.on_mouse_release(MouseButton::Middle, 20, 20);

    assert!(state.canvas.shapes().is_empty());
    assert!(!state.is_left_pressed());
}

#[test]
fn clear_only_acts_when_enabled() {
    let mut state = create_test_input_state();

    state.on_key_press(Key::Char('e'));
    assert!(!state.redraw_pending());

    drag(&mut state, (0, 0), (5, 5));
    assert!(state.canvas.is_clear_enabled());
    state.mark_rendered();

    state.on_key_press(Key::Char('E'));
    assert!(state.canvas.shapes().is_empty());
    assert!(!state.canvas.is_clear_enabled());
    assert!(state.redraw_pending());
}

#[test]
fn thickness_keys_clamp_to_range() {
    let mut state = create_test_input_state();

    for _ in 0..20 {
        state.on_key_press(Key::Char('='));
    }
    assert_eq!(state.canvas.stroke_width(), MAX_STROKE_WIDTH);

    for _ in 0..20 {
        state.on_key_press(Key::Char('-'));
    }
    assert_eq!(state.canvas.stroke_width(), MIN_STROKE_WIDTH);
}

#[test]
fn shifted_symbols_match_unshifted_bindings() {
    let mut state = create_test_input_state();

    state.on_key_press(Key::Shift);
    state.on_key_press(Key::Char('+'));
    assert_eq!(state.canvas.stroke_width(), 6.0);

    state.on_key_press(Key::Char('_'));
    state.on_key_press(Key::Char('_'));
    assert_eq!(state.canvas.stroke_width(), 4.0);
    state.on_key_release(Key::Shift);
    assert!(!state.modifiers.shift);
}

#[test]
fn shift_does_not_leak_into_letter_bindings() {
    let mut state = create_test_input_state();
    state.on_key_press(Key::Shift);
    state.on_key_press(Key::Char('G'));
    assert_eq!(state.canvas.color(), PURPLE);
}

#[test]
fn zero_thickness_presses_commit_nothing() {
    let mut state = create_test_input_state();
    for _ in 0..5 {
        state.on_key_press(Key::Char('-'));
    }
    assert_eq!(state.canvas.stroke_width(), 0.0);

    drag(&mut state, (0, 0), (30, 30));
    assert!(state.canvas.shapes().is_empty());
    assert!(!state.canvas.is_clear_enabled());
}

#[test]
fn scroll_adjusts_thickness() {
    let mut state = create_test_input_state();
    state.on_scroll(-2);
    assert_eq!(state.canvas.stroke_width(), 7.0);
    state.on_scroll(1);
    assert_eq!(state.canvas.stroke_width(), 6.0);
    assert!(state.needs_redraw);
}

#[test]
fn color_keys_change_next_shape_only() {
    let mut state = create_test_input_state();
    drag(&mut state, (0, 0), (10, 10));

    state.on_key_press(Key::Char('g'));
    assert_eq!(state.canvas.color(), GREEN);
    drag(&mut state, (0, 0), (10, 10));

    state.on_key_press(Key::Char('b'));
    state.on_key_press(Key::Char('u'));

    let shapes = state.canvas.shapes();
    assert_eq!(shapes[0].color(), PURPLE);
    assert_eq!(shapes[1].color(), GREEN);
    assert_eq!(state.canvas.color(), PURPLE);
    assert_ne!(state.canvas.color(), BLUE);
}

#[test]
fn switching_tools_mid_drag_abandons_stroke() {
    let mut state = create_test_input_state();
    state.on_mouse_press(MouseButton::Left, 5, 5);
    state.on_mouse_motion(50, 50);

    state.on_key_press(Key::Char('3'));
    state.on_mouse_motion(60, 60);
    state.on_mouse_release(MouseButton::Left, 60, 60);

    assert!(state.canvas.shapes().is_empty());
    assert_eq!(state.canvas.active_tool(), ToolKind::Rectangle);
}

#[test]
fn toggles_flip_ui_flags() {
    let mut state = create_test_input_state();

    state.on_key_press(Key::F10);
    assert!(state.show_help);
    state.on_key_press(Key::F12);
    assert!(!state.show_status_bar);
    assert!(state.redraw_pending());

    state.on_key_press(Key::F10);
    assert!(!state.show_help);
}

#[test]
fn exit_bindings_request_exit() {
    let mut state = create_test_input_state();
    state.on_key_press(Key::Char('q'));
    assert!(!state.should_exit);

    state.on_key_press(Key::Ctrl);
    state.on_key_press(Key::Char('q'));
    assert!(state.should_exit);

    let mut state = create_test_input_state();
    state.on_key_press(Key::Escape);
    assert!(state.should_exit);
}

#[test]
fn modifier_only_and_unknown_keys_are_ignored() {
    let mut state = create_test_input_state();
    state.on_key_press(Key::Alt);
    state.on_key_press(Key::Unknown);
    assert!(state.modifiers.alt);
    assert!(!state.should_exit);
    assert!(!state.redraw_pending());
}

#[test]
fn screen_dimension_changes_request_redraw() {
    let mut state = create_test_input_state();
    state.update_screen_dimensions(800, 600);
    assert!(state.redraw_pending());
    state.mark_rendered();

    state.update_screen_dimensions(800, 600);
    assert!(!state.redraw_pending());
}
