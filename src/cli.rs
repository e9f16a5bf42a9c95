use std::path::PathBuf;

use clap::Parser;

use crate::rotate::Request;

/// Rotate the internal screen and its input devices.
///
/// Without a direction the configured default is used, or normal if the
/// device is currently folded into tablet posture. Asking for the direction
/// the screen is already in rotates it back to normal.
#[derive(Parser, Debug)]
#[clap(name = "thinkpad-rotate", version, about)]
pub struct Cli {
    /// normal, left, right or inverted (also: ccw, cw, flip, half, ...)
    #[clap(value_parser, value_name = "DIRECTION")]
    pub direction: Option<String>,

    /// More output; repeat for even more
    #[clap(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Called from a hook; honours rotate.xrandr_bug_workaround
    #[clap(long = "via-hook", action = clap::ArgAction::SetTrue)]
    pub via_hook: bool,

    /// Configuration file to use instead of the default location
    #[clap(short = 'c', long = "config", value_parser, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn request(&self) -> Request {
        Request {
            direction: self.direction.clone(),
            via_hook: self.via_hook,
        }
    }
}
