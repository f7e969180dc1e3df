//! Description of the password dialog and its result.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

pub const DEFAULT_MESSAGE: &str = "rusty-wit-gui needs privileged access in order to format disks.\n\n\
     Type your password to allow this.";

pub const CANCEL_BUTTON: &str = "Cancel";
pub const OK_BUTTON: &str = "Ok";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Note,
    #[default]
    Caution,
    Stop,
}

impl Icon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Note => "note",
            Icon::Caution => "caution",
            Icon::Stop => "stop",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "note" => Ok(Icon::Note),
            "caution" => Ok(Icon::Caution),
            "stop" => Ok(Icon::Stop),
            _ => Err("unknown icon, expected one of note, caution, stop".to_string()),
        }
    }
}

/// A modal prompt with a masked text field and a cancel/confirm button pair.
///
/// The button pair and the masked field are fixed: backends compare the label the dialog reports
/// against [`DialogSpec::confirm_button`] and treat anything else as a
/// cancellation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogSpec {
    pub message: String,
    pub title: Option<String>,
    pub icon: Icon,
    pub default_answer: String,
    hidden_answer: bool,
    buttons: [&'static str; 2],
}

impl DialogSpec {
    pub fn password_prompt() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            title: None,
            icon: Icon::Caution,
            default_answer: String::new(),
            hidden_answer: true,
            buttons: [CANCEL_BUTTON, OK_BUTTON],
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = icon;
        self
    }

    /// Whether the typed text is masked. Always true for a password prompt.
    pub fn hidden_answer(&self) -> bool {
        self.hidden_answer
    }

    /// Labels in display order, cancel first.
    pub fn buttons(&self) -> &[&'static str; 2] {
        &self.buttons
    }

    pub fn cancel_button(&self) -> &'static str {
        self.buttons[0]
    }

    pub fn confirm_button(&self) -> &'static str {
        self.buttons[1]
    }

    pub fn default_button(&self) -> &'static str {
        self.confirm_button()
    }
}

/// What the user did with the dialog.
#[derive(PartialEq, Eq)]
pub enum Outcome {
    Confirmed(Zeroizing<String>),
    Cancelled,
}

impl Outcome {
    pub fn confirmed(answer: impl Into<String>) -> Self {
        Outcome::Confirmed(Zeroizing::new(answer.into()))
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Confirmed(_) => f.write_str("Confirmed(<redacted>)"),
            Outcome::Cancelled => f.write_str("Cancelled"),
        }
    }
}
