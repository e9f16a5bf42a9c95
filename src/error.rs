//! Error types for thinkpad-rotate
//!
//! Only the first two kinds are fatal by themselves; everything else is
//! whatever an external utility told us went wrong.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Direction cannot be understood: {0:?}")]
    UnknownDirection(String),

    #[error("Unable to determine rotation of {display:?}: {reason}")]
    DisplayNotFound { display: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{program} exited with {status}")]
    CommandFailed {
        program: String,
        status: std::process::ExitStatus,
    },

    #[error("Underlying I/O error")]
    IOError(#[from] std::io::Error),

    #[error("Command output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
