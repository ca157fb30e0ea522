use clap::{ArgAction, Parser};

use magic_paint::backend::{self, StartupOptions};
use magic_paint::config::Config;
use magic_paint::draw::Color;
use magic_paint::input::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, ToolKind};
use magic_paint::util;

#[derive(Parser, Debug)]
#[command(name = "magic-paint")]
#[command(version, about = "Simple paint program for Wayland desktops")]
struct Cli {
    /// Tool selected at startup (overrides config)
    #[arg(long, short = 't', value_enum, value_name = "TOOL")]
    tool: Option<ToolKind>,

    /// Initial paint color: a name (purple, red, ...) or #RRGGBB (overrides config)
    #[arg(long, short = 'c', value_name = "COLOR", value_parser = util::parse_color_arg)]
    color: Option<Color>,

    /// Initial stroke width in pixels, 0-15 (overrides config)
    #[arg(long, short = 'w', value_name = "PX", value_parser = parse_thickness)]
    thickness: Option<f64>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn parse_thickness(value: &str) -> Result<f64, String> {
    let width: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !(MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).contains(&width) {
        return Err(format!(
            "thickness must be between {} and {}",
            MIN_STROKE_WIDTH, MAX_STROKE_WIDTH
        ));
    }
    Ok(width)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    // Check for Wayland environment
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run inside a Wayland session (GNOME, KDE Plasma, Sway, etc.).");
        return Err(anyhow::anyhow!(
            "WAYLAND_DISPLAY not set: Wayland environment required"
        ));
    }

    log::info!("Starting Magic Paint...");
    log::info!("Controls:");
    log::info!("  - Tools: 1 (line), 2 (pencil), 3 (rectangle), 4 (ellipse); drag to draw");
    log::info!(
        "  - Colors: U (purple), R (red), G (green), B (blue), Y (yellow), O (orange), P (pink), W (white), K (black)"
    );
    log::info!("  - Thickness: + / - or scroll");
    log::info!("  - Clear canvas: E");
    log::info!("  - Help: F10, status bar: F12");
    log::info!("  - Exit: Escape or Ctrl+Q");

    backend::run_wayland(StartupOptions {
        tool: cli.tool,
        color: cli.color,
        thickness: cli.thickness,
    })?;

    log::info!("Magic Paint closed.");
    Ok(())
}
