//! Input devices as seen by `xinput`.

use log::warn;
use regex::Regex;

use super::{DeviceRole, InputDevice, InputManager};
use crate::error::Result;
use crate::exec;
use crate::orientation::Rotation;

pub struct XinputManager;

impl XinputManager {
    pub fn new() -> Self {
        XinputManager
    }

    fn list() -> Result<Vec<InputDevice>> {
        Ok(parse_list(&exec::output("xinput", &["list"])?))
    }
}

impl Default for XinputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager for XinputManager {
    fn pointer_devices(&mut self) -> Result<Vec<InputDevice>> {
        Ok(Self::list()?
            .into_iter()
            .filter(|device| device.role == DeviceRole::SlavePointer)
            .filter(|device| !device.name.contains("XTEST"))
            .collect())
    }

    fn find(&mut self, name: &str) -> Result<Option<InputDevice>> {
        Ok(Self::list()?
            .into_iter()
            .find(|device| device.name.contains(name)))
    }

    fn map_rotate(&mut self, device: &InputDevice, display: &str, rotation: Rotation) -> Result<()> {
        let id = device.id.to_string();
        exec::run("xinput", &ctm_args(&id, rotation))?;
        // Recomputes the matrix from the output's geometry and rotation, so
        // the device stays on the panel when other screens are attached.
        if let Err(e) = exec::run("xinput", &["map-to-output", id.as_str(), display]) {
            warn!(
                "could not map {} to {}, keeping whole-screen matrix: {}",
                device.name, display, e
            );
        }
        Ok(())
    }

    fn set_enabled(&mut self, device: &InputDevice, enabled: bool) -> Result<()> {
        exec::run(
            "xinput",
            &[
                "set-prop",
                device.id.to_string().as_str(),
                "Device Enabled",
                if enabled { "1" } else { "0" },
            ],
        )
    }
}

fn ctm_args(id: &str, rotation: Rotation) -> Vec<&str> {
    let mut args = vec!["set-prop", id, "Coordinate Transformation Matrix"];
    args.extend_from_slice(&rotation.matrix());
    args
}

/// Parse the tree printed by `xinput list`.
pub fn parse_list(raw_xinput: &str) -> Vec<InputDevice> {
    let xinput_device_pattern = Regex::new(
        r"^[^\p{L}\p{N}]*(.+?)\s+id=(\d+)\s+\[(master pointer|master keyboard|slave\s+pointer|slave\s+keyboard|floating slave)",
    )
    .expect("xinput list pattern is valid");

    let mut devices = vec![];
    for line in raw_xinput.lines() {
        let captures = match xinput_device_pattern.captures(line) {
            Some(captures) => captures,
            None => continue,
        };
        let role = match captures[3].split_whitespace().collect::<Vec<_>>().as_slice() {
            ["master", "pointer"] => DeviceRole::MasterPointer,
            ["master", "keyboard"] => DeviceRole::MasterKeyboard,
            ["slave", "pointer"] => DeviceRole::SlavePointer,
            ["slave", "keyboard"] => DeviceRole::SlaveKeyboard,
            _ => DeviceRole::Floating,
        };
        let id = match captures[2].parse() {
            Ok(id) => id,
            Err(_) => continue,
        };
        devices.push(InputDevice {
            id,
            name: captures[1].to_owned(),
            role,
        });
    }
    devices
}

#[cfg(test)]
mod tests {
    use super::*;

    const X220T: &str = "\
⎡ Virtual core pointer                    \tid=2\t[master pointer  (3)]
⎜   ↳ Virtual core XTEST pointer              \tid=4\t[slave  pointer  (2)]
⎜   ↳ Wacom ISDv4 E6 Pen stylus               \tid=9\t[slave  pointer  (2)]
⎜   ↳ Wacom ISDv4 E6 Finger touch             \tid=10\t[slave  pointer  (2)]
⎜   ↳ SynPS/2 Synaptics TouchPad              \tid=11\t[slave  pointer  (2)]
⎜   ↳ TPPS/2 IBM TrackPoint                   \tid=12\t[slave  pointer  (2)]
⎣ Virtual core keyboard                   \tid=3\t[master keyboard (2)]
    ↳ Virtual core XTEST keyboard             \tid=5\t[slave  keyboard (3)]
    ↳ AT Translated Set 2 keyboard            \tid=13\t[slave  keyboard (3)]
∼ Wacom ISDv4 E6 Pen eraser                   \tid=14\t[floating slave]
";

    #[test]
    fn parses_device_tree() {
        let devices = parse_list(X220T);
        assert_eq!(devices.len(), 10);
        assert_eq!(
            devices[0],
            InputDevice {
                id: 2,
                name: "Virtual core pointer".into(),
                role: DeviceRole::MasterPointer,
            }
        );
        assert_eq!(
            devices[5],
            InputDevice {
                id: 12,
                name: "TPPS/2 IBM TrackPoint".into(),
                role: DeviceRole::SlavePointer,
            }
        );
        assert_eq!(devices[6].role, DeviceRole::MasterKeyboard);
        assert_eq!(devices[8].role, DeviceRole::SlaveKeyboard);
        assert_eq!(devices[9].role, DeviceRole::Floating);
        assert_eq!(devices[9].name, "Wacom ISDv4 E6 Pen eraser");
    }

    #[test]
    fn matrix_arguments() {
        assert_eq!(
            ctm_args("9", Rotation::Left),
            [
                "set-prop",
                "9",
                "Coordinate Transformation Matrix",
                "0",
                "-1",
                "1",
                "1",
                "0",
                "0",
                "0",
                "0",
                "1",
            ]
        );
    }

    #[test]
    fn ignores_noise() {
        assert!(parse_list("").is_empty());
        assert!(parse_list("unable to connect to X server\n").is_empty());
    }
}
