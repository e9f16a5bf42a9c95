//! Runs the `thinkpad-rotate` binary against stand-in `xrandr` and `xinput`
//! scripts and checks exit statuses and which commands were issued.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const LAPTOP_ONLY: &[&str] = &[
    "Screen 0: minimum 8 x 8, current 1366 x 768, maximum 32767 x 32767",
    "LVDS1 connected primary 1366x768+0+0 (normal left inverted right x axis y axis) 277mm x 156mm",
    "VGA1 disconnected (normal left inverted right x axis y axis)",
];

const DOCKED: &[&str] = &[
    "Screen 0: minimum 8 x 8, current 3286 x 1080, maximum 32767 x 32767",
    "LVDS1 connected 1366x768+1920+0 (normal left inverted right x axis y axis) 277mm x 156mm",
    "HDMI1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 509mm x 286mm",
];

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    /// A PATH holding only a fake `xrandr` printing `screens` and an
    /// `xinput` with no devices. Both log their arguments.
    fn new(screens: &[&str], config: &str) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let bin = dir.path().join("bin");
        fs::create_dir(&bin)?;

        let mut xrandr = format!(
            "echo \"xrandr $*\" >> {}\nif [ \"$1\" = \"--query\" ]; then\n",
            dir.path().join("calls").display()
        );
        for line in screens {
            xrandr.push_str(&format!("echo '{}'\n", line));
        }
        xrandr.push_str("fi\n");
        write_script(&bin.join("xrandr"), &xrandr)?;
        write_script(
            &bin.join("xinput"),
            &format!("echo \"xinput $*\" >> {}\n", dir.path().join("calls").display()),
        )?;

        fs::write(dir.path().join("config.toml"), config)?;
        Ok(Sandbox { dir })
    }

    fn run(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_thinkpad-rotate"))
            .arg("-c")
            .arg(self.dir.path().join("config.toml"))
            .args(args)
            .env_clear()
            .env("PATH", self.dir.path().join("bin"))
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path())
            .output()
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.path("calls"))
            .unwrap_or_default()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn write_script(path: &Path, body: &str) -> std::io::Result<()> {
    fs::write(path, format!("#!/bin/sh\n{}", body))?;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

const WORKAROUND: &str = "[rotate]\nxrandr_bug_workaround = true\n[unity]\ntoggle_launcher = false\n";

#[test]
fn hook_without_external_screen_aborts() -> std::io::Result<()> {
    let sandbox = Sandbox::new(LAPTOP_ONLY, WORKAROUND)?;
    let output = sandbox.run(&["--via-hook", "left"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Aborting"));
    // Only the external screen query ran; nothing was rotated.
    assert_eq!(sandbox.calls(), ["xrandr --query"]);
    Ok(())
}

#[test]
fn hook_with_external_screen_rotates() -> std::io::Result<()> {
    let sandbox = Sandbox::new(DOCKED, WORKAROUND)?;
    let output = sandbox.run(&["--via-hook", "left"])?;

    assert_eq!(output.status.code(), Some(0));
    let calls = sandbox.calls();
    assert!(calls.contains(&"xrandr --output LVDS1 --rotate left".to_string()));
    assert!(calls.contains(&"xinput list".to_string()));
    Ok(())
}

#[test]
fn unknown_direction_exits_1() -> std::io::Result<()> {
    let sandbox = Sandbox::new(LAPTOP_ONLY, "")?;
    let output = sandbox.run(&["sideways"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Direction cannot be understood"));
    assert_eq!(sandbox.calls(), ["xrandr --query"]);
    Ok(())
}

#[test]
fn missing_internal_display_exits_1() -> std::io::Result<()> {
    let sandbox = Sandbox::new(LAPTOP_ONLY, "[screen]\ninternal = \"eDP1\"\n")?;
    let output = sandbox.run(&[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("eDP1"));
    Ok(())
}

#[test]
fn invalid_config_exits_1() -> std::io::Result<()> {
    let sandbox = Sandbox::new(LAPTOP_ONLY, "[rotate]\ndefault_rotation = \"up\"\n")?;
    let output = sandbox.run(&[])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(sandbox.calls().is_empty());
    Ok(())
}
