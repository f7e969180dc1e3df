use super::{PasswordPrompt, backend_failed, confirmed_answer, run_dialog};
use crate::dialog::{DialogSpec, Outcome};
use crate::error::AskpassError;
use crate::script::{self, CANCEL_EXIT_CODE};
use log::debug;
use std::process::Output;

const PROGRAM: &str = "osascript";

/// How osascript reports error number -128, raised by `displayDialog` when
/// its cancel button is pressed.
const USER_CANCELED: &str = "(-128)";

/// Native macOS dialog shown by running the rendered script through
/// `osascript -l JavaScript`.
pub struct Osascript;

impl PasswordPrompt for Osascript {
    fn prompt(&self, spec: &DialogSpec) -> Result<Outcome, AskpassError> {
        let script = script::render(spec);
        let output = run_dialog(PROGRAM, &["-l", "JavaScript", "-e", &script])?;
        interpret(output)
    }
}

fn interpret(output: Output) -> Result<Outcome, AskpassError> {
    if output.status.success() {
        return confirmed_answer(PROGRAM, output.stdout);
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if output.status.code() == Some(CANCEL_EXIT_CODE)
        || stderr.contains(USER_CANCELED)
        || stderr.contains("User canceled")
    {
        debug!("dialog dismissed: {}", stderr.trim());
        return Ok(Outcome::Cancelled);
    }
    Err(backend_failed(PROGRAM, &output))
}
