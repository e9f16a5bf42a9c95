//! Deciding on a rotation and carrying it out.
//!
//! [`decide`] is pure. [`apply`] drives every collaborator in a fixed order
//! and tolerates missing optional hardware; nothing is rolled back when a
//! later step fails.

use log::{debug, info, warn};

use crate::backends::DisplayManager;
use crate::config::{Config, RotateConfig};
use crate::desktop::Launcher;
use crate::devices::InputManager;
use crate::error::{Error, Result};
use crate::hooks::{HookRunner, Stage};
use crate::orientation::Rotation;
use crate::vkeyboard::{self, ProcessControl};

/// Devices switched off while the lid is folded over.
pub const LID_DEVICES: [&str; 2] = ["TrackPoint", "TouchPad"];

/// Everything a rotation talks to.
pub struct Backends<'a> {
    pub display: &'a mut dyn DisplayManager,
    pub input: &'a mut dyn InputManager,
    pub launcher: &'a mut dyn Launcher,
    pub processes: &'a mut dyn ProcessControl,
    pub hooks: &'a mut dyn HookRunner,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Request {
    /// Direction token from the command line.
    pub direction: Option<String>,
    /// Invoked from a hook, so the xrandr workaround applies.
    pub via_hook: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Guard {
    Proceed,
    Abort,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Rotated(Rotation),
    Aborted,
}

/// Determine the new rotation from the current one and the request.
pub fn decide(current: Rotation, requested: Option<&str>, config: &RotateConfig) -> Result<Rotation> {
    let new = match requested {
        None if !current.physically_closed() => {
            let new: Rotation = config.default_rotation.parse()?;
            info!("Using default, setting to {}", new);
            new
        }
        None => {
            info!("Using default, setting to {}", Rotation::Normal);
            Rotation::Normal
        }
        Some(token) => {
            let desired: Rotation = token.parse()?;
            if desired == current {
                info!("Already rotated {}, reverting to normal", desired);
                Rotation::Normal
            } else {
                info!("User chose to set to {}", desired);
                desired
            }
        }
    };
    Ok(new)
}

/// XRandr misapplies rotations requested from hooks while no external
/// screen is attached (Ubuntu bug 1451798), so refuse to run then.
pub fn guard(config: &Config, display: &mut dyn DisplayManager) -> Result<Guard> {
    if !config.rotate.xrandr_bug_workaround {
        return Ok(Guard::Proceed);
    }
    if display.externals(&config.screen.internal)?.is_empty() {
        warn!("Aborting since there are no external screens attached and XRandr bug workaround is enabled.");
        return Ok(Guard::Abort);
    }
    Ok(Guard::Proceed)
}

/// Perform all steps needed for a screen rotation.
pub fn apply(target: Rotation, config: &Config, backends: &mut Backends) -> Result<()> {
    let internal = config.screen.internal.as_str();
    let closed = target.physically_closed();

    backends.hooks.run(Stage::PreRotate, target, config);

    backends.display.rotate(internal, target)?;

    let exclude = config.input.exclude_pattern()?;
    for device in backends.input.pointer_devices()? {
        if exclude.as_ref().map_or(false, |re| re.is_match(&device.name)) {
            debug!("not remapping excluded device {}", device.name);
            continue;
        }
        backends.input.map_rotate(&device, internal, target)?;
    }

    if config.rotate.subpixels
        && (config.rotate.subpixels_with_external
            || backends.display.externals(internal)?.is_empty())
    {
        backends.display.set_subpixel_order(target)?;
    }

    if config.unity.toggle_launcher {
        backends.launcher.set_visible(!closed)?;
    }

    vkeyboard::set_running(backends.processes, &config.vkeyboard.program, closed)?;

    for name in LID_DEVICES.iter() {
        match backends.input.find(name)? {
            Some(device) => backends.input.set_enabled(&device, !closed)?,
            None => {
                info!("{} was not found, could not be (de)activated.", name);
                debug!("no input device name contains {:?}", name);
            }
        }
    }

    backends.hooks.run(Stage::PostRotate, target, config);
    Ok(())
}

/// Process exit status for the result of [`run`].
pub fn exit_code(result: &Result<Outcome>) -> i32 {
    match result {
        Ok(Outcome::Rotated(_)) => 0,
        Ok(Outcome::Aborted) | Err(_) => 1,
    }
}

/// One full invocation: guard, query, decide, apply.
pub fn run(request: &Request, config: &Config, backends: &mut Backends) -> Result<Outcome> {
    if request.via_hook && guard(config, backends.display)? == Guard::Abort {
        return Ok(Outcome::Aborted);
    }

    let internal = &config.screen.internal;
    let current = backends
        .display
        .rotation(internal)
        .map_err(|e| match e {
            Error::DisplayNotFound { .. } => e,
            other => Error::DisplayNotFound {
                display: internal.clone(),
                reason: other.to_string(),
            },
        })?;
    debug!("{} is currently {}", internal, current);

    let target = decide(current, request.direction.as_deref(), &config.rotate)?;
    apply(target, config, backends)?;
    Ok(Outcome::Rotated(target))
}
