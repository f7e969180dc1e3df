use super::{PasswordPrompt, backend_failed, confirmed_answer, run_dialog};
use crate::dialog::{DialogSpec, Outcome};
use crate::error::AskpassError;
use std::process::Output;

/// Both zenity and kdialog exit with 1 when the dialog is cancelled or closed.
const DISMISSED_EXIT_CODE: i32 = 1;

/// GTK password dialog. zenity has no portable icon option across its major
/// versions, so [`DialogSpec::icon`] is not passed through.
pub struct Zenity;

impl Zenity {
    const PROGRAM: &'static str = "zenity";

    fn args(spec: &DialogSpec) -> Vec<String> {
        let mut args = vec![
            "--entry".to_string(),
            format!("--text={}", spec.message),
            format!("--entry-text={}", spec.default_answer),
            format!("--ok-label={}", spec.confirm_button()),
            format!("--cancel-label={}", spec.cancel_button()),
            "--modal".to_string(),
        ];
        if spec.hidden_answer() {
            args.push("--hide-text".to_string());
        }
        if let Some(title) = &spec.title {
            args.push(format!("--title={title}"));
        }
        args
    }
}

impl PasswordPrompt for Zenity {
    fn prompt(&self, spec: &DialogSpec) -> Result<Outcome, AskpassError> {
        let args = Self::args(spec);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        interpret(Self::PROGRAM, run_dialog(Self::PROGRAM, &args)?)
    }
}

/// KDE password dialog.
pub struct Kdialog;

impl Kdialog {
    const PROGRAM: &'static str = "kdialog";

    fn args(spec: &DialogSpec) -> Vec<String> {
        let mut args = vec![
            "--password".to_string(),
            spec.message.clone(),
            "--ok-label".to_string(),
            spec.confirm_button().to_string(),
            "--cancel-label".to_string(),
            spec.cancel_button().to_string(),
        ];
        if let Some(title) = &spec.title {
            args.push("--title".to_string());
            args.push(title.clone());
        }
        args
    }
}

impl PasswordPrompt for Kdialog {
    fn prompt(&self, spec: &DialogSpec) -> Result<Outcome, AskpassError> {
        let args = Self::args(spec);
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        interpret(Self::PROGRAM, run_dialog(Self::PROGRAM, &args)?)
    }
}

fn interpret(program: &'static str, output: Output) -> Result<Outcome, AskpassError> {
    if output.status.success() {
        confirmed_answer(program, output.stdout)
    } else if output.status.code() == Some(DISMISSED_EXIT_CODE) {
        Ok(Outcome::Cancelled)
    } else {
        Err(backend_failed(program, &output))
    }
}
