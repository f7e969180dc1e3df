//! Prompt backends.
//!
//! Each backend shows a [`DialogSpec`] through one mechanism and reports the
//! user's [`Outcome`]:
//!
//! - [`Osascript`]: native macOS dialog through JavaScript for Automation
//! - [`Zenity`] and [`Kdialog`]: GTK and KDE dialogs on Linux desktops
//! - [`Terminal`]: masked input on the controlling terminal
//! - [`Stdin`]: one line from standard input, for headless callers

mod dialog_tools;
mod osascript;
mod terminal;

pub use dialog_tools::{Kdialog, Zenity};
pub use osascript::Osascript;
pub use terminal::{Stdin, Terminal};

use crate::dialog::{DialogSpec, Outcome};
use crate::error::AskpassError;
use log::debug;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::str::FromStr;
use zeroize::Zeroizing;

pub trait PasswordPrompt {
    /// Shows the dialog and blocks until the user answers it.
    fn prompt(&self, spec: &DialogSpec) -> Result<Outcome, AskpassError>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Auto,
    Osascript,
    Zenity,
    Kdialog,
    Terminal,
    Stdin,
}

pub const POSSIBLE_BACKENDS: &[&str] = &["auto", "osascript", "zenity", "kdialog", "terminal", "stdin"];

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Auto => "auto",
            Backend::Osascript => "osascript",
            Backend::Zenity => "zenity",
            Backend::Kdialog => "kdialog",
            Backend::Terminal => "terminal",
            Backend::Stdin => "stdin",
        }
    }

    /// Replaces [`Backend::Auto`] with the backend to use on this machine.
    pub fn resolve(self) -> Backend {
        match self {
            Backend::Auto => detect(cfg!(target_os = "macos"), |program| {
                find_in_path(program).is_some()
            }),
            backend => backend,
        }
    }

    pub fn into_prompt(self) -> Result<Box<dyn PasswordPrompt>, AskpassError> {
        let prompt: Box<dyn PasswordPrompt> = match self.resolve() {
            Backend::Osascript => {
                if !cfg!(target_os = "macos") {
                    return Err(AskpassError::BackendUnavailable(
                        "osascript is only available on macOS".to_string(),
                    ));
                }
                Box::new(Osascript)
            }
            Backend::Zenity => Box::new(Zenity),
            Backend::Kdialog => Box::new(Kdialog),
            Backend::Terminal => Box::new(Terminal),
            Backend::Stdin => Box::new(Stdin),
            Backend::Auto => unreachable!("resolve never returns Auto"),
        };
        Ok(prompt)
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Backend::Auto),
            "osascript" => Ok(Backend::Osascript),
            "zenity" => Ok(Backend::Zenity),
            "kdialog" => Ok(Backend::Kdialog),
            "terminal" => Ok(Backend::Terminal),
            "stdin" => Ok(Backend::Stdin),
            _ => Err(format!(
                "unknown backend, expected one of {}",
                POSSIBLE_BACKENDS.join(", ")
            )),
        }
    }
}

/// Runs a dialog program to completion. Its stdin is closed and its stderr
/// captured; the dialog itself talks to the window server, not to us.
fn run_dialog(program: &'static str, args: &[&str]) -> Result<Output, AskpassError> {
    debug!("running {program}");
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| AskpassError::Spawn { program, source })
}

/// Turns a dialog program's stdout into the confirmed answer, dropping the
/// single newline the program terminates its output with.
fn confirmed_answer(program: &'static str, stdout: Vec<u8>) -> Result<Outcome, AskpassError> {
    let mut answer = Zeroizing::new(
        String::from_utf8(stdout).map_err(|_| AskpassError::InvalidAnswer { program })?,
    );
    if answer.ends_with('\n') {
        answer.pop();
    }
    Ok(Outcome::Confirmed(answer))
}

fn backend_failed(program: &'static str, output: &Output) -> AskpassError {
    AskpassError::BackendFailed {
        program,
        status: output.status,
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
}

fn detect(is_macos: bool, available: impl Fn(&str) -> bool) -> Backend {
    let backend = if is_macos {
        Backend::Osascript
    } else if available("zenity") {
        Backend::Zenity
    } else if available("kdialog") {
        Backend::Kdialog
    } else {
        Backend::Terminal
    };
    debug!("auto-selected {backend} backend");
    backend
}

fn find_in_path(program: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmed_answer_strips_one_newline() {
        let outcome = confirmed_answer("zenity", b"secret123\n".to_vec()).unwrap();
        assert_eq!(outcome, Outcome::confirmed("secret123"));
        let outcome = confirmed_answer("zenity", b"\n".to_vec()).unwrap();
        assert_eq!(outcome, Outcome::confirmed(""));
        let outcome = confirmed_answer("zenity", b"two\n\n".to_vec()).unwrap();
        assert_eq!(outcome, Outcome::confirmed("two\n"));
        let outcome = confirmed_answer("zenity", b" spaced ".to_vec()).unwrap();
        assert_eq!(outcome, Outcome::confirmed(" spaced "));
    }

    #[test]
    fn confirmed_answer_rejects_invalid_utf8() {
        assert!(matches!(
            confirmed_answer("kdialog", vec![0xff, 0xfe]),
            Err(AskpassError::InvalidAnswer { program: "kdialog" })
        ));
    }

    #[test]
    fn auto_prefers_osascript_on_macos() {
        assert_eq!(detect(true, |_| true), Backend::Osascript);
    }

    #[test]
    fn auto_falls_back_in_order() {
        assert_eq!(detect(false, |_| true), Backend::Zenity);
        assert_eq!(detect(false, |p| p == "kdialog"), Backend::Kdialog);
        assert_eq!(detect(false, |_| false), Backend::Terminal);
    }

    #[test]
    fn explicit_backend_is_kept() {
        assert_eq!(Backend::Stdin.resolve(), Backend::Stdin);
        assert_eq!(Backend::Zenity.resolve(), Backend::Zenity);
    }

    #[test]
    fn parses_every_listed_backend() {
        for name in POSSIBLE_BACKENDS {
            let backend: Backend = name.parse().unwrap();
            assert_eq!(backend.as_str(), *name);
        }
        assert!("pinentry".parse::<Backend>().is_err());
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn osascript_unavailable_off_macos() {
        assert!(matches!(
            Backend::Osascript.into_prompt(),
            Err(AskpassError::BackendUnavailable(_))
        ));
    }
}
