use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn magic_paint_cmd() -> Command {
    Command::cargo_bin("magic-paint").expect("binary exists")
}

#[test]
fn magic_paint_help_prints_usage() {
    magic_paint_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Simple paint program for Wayland desktops",
        ))
        .stdout(predicate::str::contains("--thickness"));
}

#[test]
fn drawing_requires_wayland_env() {
    let temp = TempDir::new().unwrap();
    magic_paint_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn unknown_tool_is_rejected() {
    magic_paint_cmd()
        .args(["--tool", "airbrush"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'airbrush'"));
}

#[test]
fn out_of_range_thickness_is_rejected() {
    magic_paint_cmd()
        .args(["--thickness", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("thickness must be between"));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("magic-paint").join("config.toml");

    magic_paint_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let written = std::fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("[keybindings]"));

    magic_paint_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
