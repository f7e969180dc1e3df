use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failures that stop the prompt from producing an answer.
///
/// A user cancelling the dialog is not an error; see
/// [`Outcome::Cancelled`](crate::dialog::Outcome::Cancelled).
#[derive(Debug, Error)]
pub enum AskpassError {
    #[error("no usable prompt backend: {0}")]
    BackendUnavailable(String),
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    BackendFailed {
        program: &'static str,
        status: ExitStatus,
        stderr: String,
    },
    #[error("{program} returned an answer that is not valid UTF-8")]
    InvalidAnswer { program: &'static str },
    #[error("failed to read password: {0}")]
    Read(#[source] io::Error),
    #[error("failed to read config file {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
