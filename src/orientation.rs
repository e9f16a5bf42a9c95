//! # Rotation
//!
//! The four cardinal orientations of the internal panel, and everything
//! the rest of the crate needs to know about each of them.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rotation {
    /// Zero degree rotation; laptop posture.
    Normal,
    /// Screen "Up" is on the left side.
    Left,
    /// Screen "Up" is on the right side.
    Right,
    /// 180 degree rotation; the lid is folded over into tablet posture.
    Inverted,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Normal,
        Rotation::Left,
        Rotation::Right,
        Rotation::Inverted,
    ];

    /// Whether the device is folded into tablet posture in this orientation.
    pub fn physically_closed(&self) -> bool {
        matches!(self, Self::Inverted)
    }

    /// Name as understood by `xrandr --rotate`.
    pub fn xrandr_name(&self) -> &'static str {
        match *self {
            Self::Normal => "normal",
            Self::Left => "left",
            Self::Right => "right",
            Self::Inverted => "inverted",
        }
    }

    /// Subpixel layout of the physical panel after rotating.
    pub fn subpixel_order(&self) -> &'static str {
        match *self {
            Self::Normal => "rgb",
            Self::Left => "vrgb",
            Self::Right => "vbgr",
            Self::Inverted => "bgr",
        }
    }

    /// Coordinate Transformation Matrix for absolute pointing devices.
    pub fn matrix(&self) -> [&'static str; 9] {
        match *self {
            Self::Normal => ["1", "0", "0", "0", "1", "0", "0", "0", "1"],
            Self::Left => ["0", "-1", "1", "1", "0", "0", "0", "0", "1"],
            Self::Right => ["0", "1", "0", "-1", "0", "1", "0", "0", "1"],
            Self::Inverted => ["-1", "0", "1", "0", "-1", "1", "0", "0", "1"],
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xrandr_name())
    }
}

impl FromStr for Rotation {
    type Err = Error;

    /// Translate a user or config supplied direction token.
    fn from_str(token: &str) -> Result<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "normal" | "none" | "no" => Ok(Self::Normal),
            "left" | "ccw" | "counterclockwise" | "counter-clockwise" => Ok(Self::Left),
            "right" | "cw" | "clockwise" => Ok(Self::Right),
            "inverted" | "flip" | "half" | "upside-down" => Ok(Self::Inverted),
            _ => Err(Error::UnknownDirection(token.to_owned())),
        }
    }
}
