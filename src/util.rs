//! Utility functions for color names.
//!
//! Named colors are shared by the configuration file, the `--color` flag, and
//! the status bar label.

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and the command line to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "purple", "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "purple" => Some(PURPLE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Uses approximate matching (threshold-based) to identify colors.
/// Used by the UI status bar to display the current color name.
///
/// # Returns
/// A static string with the color name, or "Custom" if the color doesn't
/// match any predefined color.
pub fn color_to_name(color: &Color) -> &'static str {
    if (0.15..=0.25).contains(&color.r) && color.g < 0.1 && (0.38..=0.5).contains(&color.b) {
        "Purple"
    } else if color.r > 0.9 && color.g < 0.1 && color.b < 0.1 {
        "Red"
    } else if color.r < 0.1 && color.g > 0.9 && color.b < 0.1 {
        "Green"
    } else if color.r < 0.1 && color.g < 0.1 && color.b > 0.9 {
        "Blue"
    } else if color.r > 0.9 && color.g > 0.9 && color.b < 0.1 {
        "Yellow"
    } else if color.r > 0.9 && (0.4..=0.6).contains(&color.g) && color.b < 0.1 {
        "Orange"
    } else if color.r > 0.9 && color.g < 0.1 && color.b > 0.9 {
        "Pink"
    } else if color.r > 0.9 && color.g > 0.9 && color.b > 0.9 {
        "White"
    } else if color.r < 0.1 && color.g < 0.1 && color.b < 0.1 {
        "Black"
    } else {
        "Custom"
    }
}

/// Display label for a color: its palette name, or `#RRGGBB` for custom colors.
pub fn color_label(color: &Color) -> String {
    match color_to_name(color) {
        "Custom" => {
            let [r, g, b] = color.to_rgb8();
            format!("#{r:02X}{g:02X}{b:02X}")
        }
        name => name.to_string(),
    }
}

/// Parses a color given on the command line.
///
/// Accepts a palette name or a `#RRGGBB` hex triplet.
pub fn parse_color_arg(value: &str) -> Result<Color, String> {
    if let Some(color) = name_to_color(value) {
        return Ok(color);
    }

    let hex = value
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| format!("unknown color '{value}' (use a name or #RRGGBB)"))?;

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color '{value}'"));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|err| format!("invalid hex color '{value}': {err}"))
    };

    Ok(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
