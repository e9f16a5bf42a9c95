use log::debug;
use regex::Regex;

use crate::error::{Error, Result};
use crate::exec;
use crate::orientation::Rotation;

use super::DisplayManager;

const XSETTINGS_SCHEMA: &str = "org.gnome.settings-daemon.plugins.xsettings";

/// X11 display control through `xrandr`, subpixel order through `gsettings`.
pub struct XrandrBackend;

impl XrandrBackend {
    pub fn new() -> Self {
        XrandrBackend
    }

    fn query() -> Result<String> {
        exec::output("xrandr", &["--query"])
    }
}

impl Default for XrandrBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayManager for XrandrBackend {
    fn rotation(&mut self, display: &str) -> Result<Rotation> {
        let raw_rotation_state = Self::query().map_err(|e| Error::DisplayNotFound {
            display: display.to_owned(),
            reason: e.to_string(),
        })?;
        parse_rotation(&raw_rotation_state, display).ok_or_else(|| Error::DisplayNotFound {
            display: display.to_owned(),
            reason: format!("display {} not found in xrandr output", display),
        })
    }

    fn externals(&mut self, internal: &str) -> Result<Vec<String>> {
        let externals = parse_externals(&Self::query()?, internal);
        debug!("external screens: {:?}", externals);
        Ok(externals)
    }

    fn rotate(&mut self, display: &str, rotation: Rotation) -> Result<()> {
        exec::run(
            "xrandr",
            &["--output", display, "--rotate", rotation.xrandr_name()],
        )
    }

    fn set_subpixel_order(&mut self, rotation: Rotation) -> Result<()> {
        exec::run(
            "gsettings",
            &["set", XSETTINGS_SCHEMA, "rgba-order", rotation.subpixel_order()],
        )
    }
}

/// Find the rotation of `display` in `xrandr --query` output.
///
/// A connected but disabled output has no rotation column and counts as normal.
pub fn parse_rotation(xrandr_output: &str, display: &str) -> Option<Rotation> {
    let xrandr_output_pattern = Regex::new(&format!(
        r"^{} connected(?: primary)?(?: \d+x\d+\+\d+\+\d+)?(?: (normal|left|inverted|right))?(?: (?:X and Y|X|Y) axis)? \(",
        regex::escape(display),
    ))
    .ok()?;
    for xrandr_output_line in xrandr_output.lines() {
        if let Some(captures) = xrandr_output_pattern.captures(xrandr_output_line) {
            return Some(match captures.get(1) {
                Some(transform) => transform.as_str().parse().ok()?,
                None => Rotation::Normal,
            });
        }
    }
    None
}

/// Every connected output except `internal`.
pub fn parse_externals(xrandr_output: &str, internal: &str) -> Vec<String> {
    xrandr_output
        .lines()
        .filter_map(|line| {
            let mut words = line.split_whitespace();
            match (words.next(), words.next()) {
                (Some(name), Some("connected")) if name != internal => Some(name.to_owned()),
                _ => None,
            }
        })
        .collect()
}
