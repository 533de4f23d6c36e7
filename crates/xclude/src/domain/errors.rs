//! Domain-specific errors.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors surfaced by the ignore-set core and its git port.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no git workspace found")]
    NoWorkspace,

    #[error("path is outside the workspace root: {path}")]
    OutsideWorkspace { path: PathBuf },

    #[error("failed to {action} {path}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch `{command}`")]
    GitSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    GitCommand {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("`{command}` produced non-UTF-8 output")]
    GitOutputUtf8 { command: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
