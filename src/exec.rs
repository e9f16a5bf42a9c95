//! Thin wrappers around `std::process::Command` for the utilities we drive.

use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Run `program` to completion, failing on a non-zero exit status.
pub fn run<S: AsRef<str>>(program: &str, args: &[S]) -> Result<()> {
    debug!("{}", command_line(program, args));
    let status = Command::new(program)
        .args(args.iter().map(AsRef::as_ref))
        .stdout(Stdio::null())
        .status()?;
    if !status.success() {
        return Err(Error::CommandFailed {
            program: program.to_owned(),
            status,
        });
    }
    Ok(())
}

/// Run `program` to completion and return its standard output.
pub fn output<S: AsRef<str>>(program: &str, args: &[S]) -> Result<String> {
    debug!("{}", command_line(program, args));
    let output = Command::new(program)
        .args(args.iter().map(AsRef::as_ref))
        .output()?;
    if !output.status.success() {
        return Err(Error::CommandFailed {
            program: program.to_owned(),
            status: output.status,
        });
    }
    Ok(String::from_utf8(output.stdout)?)
}

fn command_line<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    let mut line = program.to_owned();
    for arg in args {
        line.push(' ');
        line.push_str(arg.as_ref());
    }
    line
}
