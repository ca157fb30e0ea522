/// UI rendering: status bar and help overlay
use crate::config::{HelpOverlayStyle, StatusBarStyle, StatusPosition};
use crate::input::InputState;

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Background rectangle X offset
const STATUS_BG_OFFSET_X: f64 = 5.0;
/// Background rectangle Y offset
const STATUS_BG_OFFSET_Y: f64 = 3.0;
/// Background rectangle width padding
const STATUS_BG_WIDTH_PAD: f64 = 10.0;
/// Background rectangle height padding
const STATUS_BG_HEIGHT_PAD: f64 = 8.0;
/// Gap between the color swatch and the status text
const STATUS_SWATCH_GAP: f64 = 6.0;

/// Fallback character width for monospace font estimation
const HELP_CHAR_WIDTH_ESTIMATE: f64 = 9.0;

const HELP_TEXT: &[&str] = &[
    "━━━━━━━━━━━━━━━━━━━━━━ MAGIC PAINT CONTROLS ━━━━━━━━━━━━━━━━━━━━━━",
    "",
    "  TOOLS                             COLORS",
    "    1            Line                 U   Purple     O   Orange",
    "    2            Pencil               R   Red        P   Pink",
    "    3            Rectangle            G   Green      W   White",
    "    4            Ellipse              B   Blue       K   Black",
    "    Drag         Draw with tool       Y   Yellow",
    "",
    "  STROKE                            ACTIONS",
    "    + / -        Wider / narrower     E              Clear canvas",
    "    Scroll       Wider / narrower     F12            Status bar",
    "    Width 0      Draws nothing        F10            Toggle help",
    "                                      Escape/Ctrl+Q  Exit",
    "",
    "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━",
];

/// Builds the status bar text for the current state.
///
/// Shows the active tool, color name, stroke width, and whether there is
/// anything to clear.
pub fn status_text(input_state: &InputState) -> String {
    let canvas = &input_state.canvas;
    let color = canvas.color();
    let clear_hint = if canvas.is_clear_enabled() {
        "E=Clear"
    } else {
        "Empty"
    };

    format!(
        "[{}] [{}] [{}px] [{}]  F10=Help",
        canvas.active_tool().name(),
        crate::util::color_label(&color),
        canvas.stroke_width().round() as i32,
        clear_hint
    )
}

/// Render status bar showing current tool, color, and stroke width
pub fn render_status_bar(
    ctx: &cairo::Context,
    input_state: &InputState,
    position: StatusPosition,
    style: &StatusBarStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let color = input_state.canvas.color();
    let status_text = status_text(input_state);

    ctx.set_font_size(style.font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);

    let extents = match ctx.text_extents(&status_text) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!(
                "Failed to measure status bar text: {}, skipping status bar",
                e
            );
            return;
        }
    };
    let swatch_width = style.dot_radius * 2.0 + STATUS_SWATCH_GAP;
    let content_width = swatch_width + extents.width();
    let text_height = extents.height().max(style.dot_radius * 2.0);

    let padding = style.padding;
    let (x, y) = match position {
        StatusPosition::TopLeft => (padding, padding + text_height),
        StatusPosition::TopRight => (
            screen_width as f64 - content_width - padding,
            padding + text_height,
        ),
        StatusPosition::BottomLeft => (padding, screen_height as f64 - padding),
        StatusPosition::BottomRight => (
            screen_width as f64 - content_width - padding,
            screen_height as f64 - padding,
        ),
    };

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(
        x - STATUS_BG_OFFSET_X,
        y - text_height - STATUS_BG_OFFSET_Y,
        content_width + STATUS_BG_WIDTH_PAD,
        text_height + STATUS_BG_HEIGHT_PAD,
    );
    let _ = ctx.fill();

    // Color swatch
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.arc(
        x + style.dot_radius,
        y - text_height / 2.0,
        style.dot_radius,
        0.0,
        2.0 * std::f64::consts::PI,
    );
    let _ = ctx.fill();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(x + swatch_width, y);
    let _ = ctx.show_text(&status_text);
}

/// Render help overlay showing all keybindings
pub fn render_help_overlay(
    ctx: &cairo::Context,
    style: &HelpOverlayStyle,
    screen_width: u32,
    screen_height: u32,
) {
    ctx.set_font_size(style.font_size);
    ctx.select_font_face(
        "Monospace",
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );

    let mut max_width: f64 = 0.0;
    for line in HELP_TEXT {
        let width = match ctx.text_extents(line) {
            Ok(ext) => ext.width(),
            Err(e) => {
                log::warn!(
                    "Failed to measure help text line '{}': {}, using fallback width",
                    line,
                    e
                );
                line.chars().count() as f64 * HELP_CHAR_WIDTH_ESTIMATE
            }
        };
        max_width = max_width.max(width);
    }

    let box_width = max_width + style.padding * 2.0;
    let box_height = (HELP_TEXT.len() as f64) * style.line_height + style.padding * 2.0;

    // Center the box
    let box_x = (screen_width as f64 - box_width) / 2.0;
    let box_y = (screen_height as f64 - box_height) / 2.0;

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.fill();

    let [r, g, b, a] = style.border_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(style.border_width);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.stroke();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    for (i, line) in HELP_TEXT.iter().enumerate() {
        let text_x = box_x + style.padding;
        let text_y = box_y + style.padding + (i as f64 + 1.0) * style.line_height;

        ctx.move_to(text_x, text_y);
        let _ = ctx.show_text(line);
    }
}
