//! User scripts run around a rotation.
//!
//! For each stage the script configured under `[hooks]` runs first, then
//! every file in the sibling `<script>.d/` directory in name order. Each
//! one gets the new direction as its only argument, and the direction plus
//! a JSON snapshot of the configuration in its environment.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info, warn};

use crate::config::{expand_home, Config};
use crate::orientation::Rotation;

pub const DIRECTION_ENV: &str = "THINKPAD_ROTATE_DIRECTION";
pub const CONFIG_ENV: &str = "THINKPAD_ROTATE_CONFIG";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    PreRotate,
    PostRotate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::PreRotate => "prerotate",
            Stage::PostRotate => "postrotate",
        })
    }
}

pub trait HookRunner {
    /// Run every hook of `stage`. Failures are logged, never returned.
    fn run(&mut self, stage: Stage, rotation: Rotation, config: &Config);
}

pub struct ScriptHooks;

impl ScriptHooks {
    /// Scripts for a stage whose main hook lives at `path`, in run order.
    pub fn scripts(path: &Path) -> Vec<PathBuf> {
        let mut scripts = vec![];
        if path.is_file() {
            scripts.push(path.to_path_buf());
        }

        let pattern = format!("{}.d/*", glob::Pattern::escape(&path.to_string_lossy()));
        match glob::glob(&pattern) {
            Ok(entries) => {
                let mut extra: Vec<PathBuf> = entries
                    .filter_map(|entry| match entry {
                        Ok(path) => Some(path),
                        Err(e) => {
                            warn!("skipping hook: {}", e);
                            None
                        }
                    })
                    .filter(|path| path.is_file())
                    .collect();
                extra.sort();
                scripts.extend(extra);
            }
            Err(e) => warn!("bad hook directory pattern {}: {}", pattern, e),
        }
        scripts
    }
}

impl HookRunner for ScriptHooks {
    fn run(&mut self, stage: Stage, rotation: Rotation, config: &Config) {
        let path = expand_home(match stage {
            Stage::PreRotate => config.hooks.prerotate.as_str(),
            Stage::PostRotate => config.hooks.postrotate.as_str(),
        });
        let scripts = Self::scripts(&path);
        if scripts.is_empty() {
            debug!("no {} hooks at {}", stage, path.display());
            return;
        }

        let snapshot = match config.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!("cannot hand configuration to {} hooks: {}", stage, e);
                String::new()
            }
        };

        for script in scripts {
            info!("running {} hook {}", stage, script.display());
            let status = Command::new(&script)
                .arg(rotation.xrandr_name())
                .env(DIRECTION_ENV, rotation.xrandr_name())
                .env(CONFIG_ENV, &snapshot)
                .status();
            match status {
                Ok(status) if status.success() => {}
                Ok(status) => warn!("{} hook {} exited with {}", stage, script.display(), status),
                Err(e) => warn!("{} hook {} failed to start: {}", stage, script.display(), e),
            }
        }
    }
}
