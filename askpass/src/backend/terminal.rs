use super::PasswordPrompt;
use crate::dialog::{DialogSpec, Outcome};
use crate::error::AskpassError;
use rpassword::prompt_password;
use std::io::{self, BufRead};
use zeroize::Zeroizing;

/// Masked prompt on the controlling terminal. Used when no graphical dialog
/// is available; end of input counts as cancelling.
pub struct Terminal;

impl PasswordPrompt for Terminal {
    fn prompt(&self, spec: &DialogSpec) -> Result<Outcome, AskpassError> {
        match prompt_password(terminal_prompt(spec)) {
            Ok(password) => Ok(Outcome::Confirmed(Zeroizing::new(password))),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(Outcome::Cancelled),
            Err(err) => Err(AskpassError::Read(err)),
        }
    }
}

fn terminal_prompt(spec: &DialogSpec) -> String {
    let mut prompt = match &spec.title {
        Some(title) => format!("{title}\n{}", spec.message),
        None => spec.message.clone(),
    };
    if !prompt.ends_with(char::is_whitespace) {
        prompt.push(' ');
    }
    prompt
}

/// Reads the answer as one line from standard input, without a prompt.
/// Like [`Terminal`], input that ends before a newline counts as cancelling.
pub struct Stdin;

impl PasswordPrompt for Stdin {
    fn prompt(&self, _spec: &DialogSpec) -> Result<Outcome, AskpassError> {
        read_answer(io::stdin().lock())
    }
}

fn read_answer(mut reader: impl BufRead) -> Result<Outcome, AskpassError> {
    let mut line = Zeroizing::new(String::new());
    reader.read_line(&mut line).map_err(AskpassError::Read)?;
    if line.pop() != Some('\n') {
        return Ok(Outcome::Cancelled);
    }
    if line.ends_with('\r') {
        line.pop();
    }
    Ok(Outcome::Confirmed(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_single_line() {
        let outcome = read_answer("secret123\nignored\n".as_bytes()).unwrap();
        assert_eq!(outcome, Outcome::confirmed("secret123"));
    }

    #[test]
    fn empty_line_is_empty_answer() {
        assert_eq!(read_answer("\n".as_bytes()).unwrap(), Outcome::confirmed(""));
        assert_eq!(read_answer("\r\n".as_bytes()).unwrap(), Outcome::confirmed(""));
    }

    #[test]
    fn end_of_input_cancels() {
        assert_eq!(read_answer("".as_bytes()).unwrap(), Outcome::Cancelled);
    }

    #[test]
    fn unterminated_line_cancels() {
        assert_eq!(read_answer("pw".as_bytes()).unwrap(), Outcome::Cancelled);
    }

    #[test]
    fn terminal_prompt_includes_title() {
        let spec = DialogSpec::password_prompt()
            .with_message("Password:")
            .with_title(Some("rusty-wit-gui".to_string()));
        assert_eq!(terminal_prompt(&spec), "rusty-wit-gui\nPassword: ");
        let spec = DialogSpec::password_prompt().with_message("Password: ");
        assert_eq!(terminal_prompt(&spec), "Password: ");
    }
}
