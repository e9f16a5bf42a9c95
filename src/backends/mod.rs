use crate::error::Result;
use crate::orientation::Rotation;

pub trait DisplayManager {
    /// Get the current rotation of `display`.
    fn rotation(&mut self, display: &str) -> Result<Rotation>;

    /// Connected outputs other than `internal`.
    fn externals(&mut self, internal: &str) -> Result<Vec<String>>;

    /// Change the rotation of `display`.
    fn rotate(&mut self, display: &str, rotation: Rotation) -> Result<()>;

    /// Make font rendering match the rotated panel.
    fn set_subpixel_order(&mut self, rotation: Rotation) -> Result<()>;
}

pub mod xrandr;
