//! Input device traits.
//!
//! Absolute pointing devices like touchscreens and digitizers need their
//! coordinates remapped after a rotation. The TrackPoint and TouchPad are
//! switched off in tablet posture, where they sit under the folded lid.

pub mod xinput;

use crate::error::Result;
use crate::orientation::Rotation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeviceRole {
    MasterPointer,
    MasterKeyboard,
    SlavePointer,
    SlaveKeyboard,
    Floating,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputDevice {
    pub id: u32,
    pub name: String,
    pub role: DeviceRole,
}

pub trait InputManager {
    /// Every physical pointer device attached to the core pointer.
    fn pointer_devices(&mut self) -> Result<Vec<InputDevice>>;

    /// First device whose name contains `name`.
    fn find(&mut self, name: &str) -> Result<Option<InputDevice>>;

    /// Confine the device to `display` and make its coordinates follow the
    /// panel in `rotation`.
    fn map_rotate(&mut self, device: &InputDevice, display: &str, rotation: Rotation) -> Result<()>;

    fn set_enabled(&mut self, device: &InputDevice, enabled: bool) -> Result<()>;
}
