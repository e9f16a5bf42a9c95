//! Desktop shell integration.

use crate::error::Result;
use crate::exec;

const LAUNCHER_HIDE_MODE: &str = "/org/compiz/profiles/unity/plugins/unityshell/launcher-hide-mode";

pub trait Launcher {
    fn set_visible(&mut self, visible: bool) -> Result<()>;
}

/// The Unity launcher, switched between "never hide" and "autohide".
pub struct UnityLauncher;

impl Launcher for UnityLauncher {
    fn set_visible(&mut self, visible: bool) -> Result<()> {
        exec::run(
            "dconf",
            &["write", LAUNCHER_HIDE_MODE, if visible { "0" } else { "1" }],
        )
    }
}
