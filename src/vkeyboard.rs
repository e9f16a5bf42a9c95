//! On-screen keyboard lifecycle.
//!
//! The keyboard only makes sense in tablet posture, so it is started when
//! the lid is folded over and killed otherwise.

use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::error::Result;
use crate::exec;

pub trait ProcessControl {
    fn is_running(&mut self, program: &str) -> Result<bool>;

    /// Start `program` without waiting for it.
    fn spawn_detached(&mut self, program: &str) -> Result<()>;

    /// Terminate every process named `program`.
    fn kill_all(&mut self, program: &str) -> Result<()>;
}

/// Processes of the current session, via `pgrep` and `killall`.
pub struct SystemProcesses;

impl ProcessControl for SystemProcesses {
    fn is_running(&mut self, program: &str) -> Result<bool> {
        let status = Command::new("pgrep")
            .arg(program)
            .stdout(Stdio::null())
            .status()?;
        Ok(status.success())
    }

    fn spawn_detached(&mut self, program: &str) -> Result<()> {
        debug!("{} &", program);
        Command::new(program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }

    fn kill_all(&mut self, program: &str) -> Result<()> {
        exec::run("killall", &[program])
    }
}

/// Start or stop `program` so that it runs exactly when `should_run`.
pub fn set_running(
    processes: &mut dyn ProcessControl,
    program: &str,
    should_run: bool,
) -> Result<()> {
    if should_run {
        if processes.is_running(program)? {
            debug!("{} is already running", program);
        } else if let Err(e) = processes.spawn_detached(program) {
            warn!("could not start {}: {}", program, e);
        }
    } else if let Err(e) = processes.kill_all(program) {
        debug!("could not stop {}: {}", program, e);
    }
    Ok(())
}
