use clap::Arg;
use std::fmt::Display;
use std::str::FromStr;

/// Name, long flag and help text of a command line argument, shared between
/// the argument builder and the code reading the matches.
pub struct ArgConstant<'a> {
    pub long: &'a str,
    pub name: &'a str,
    pub help: &'a str,
}

impl ArgConstant<'static> {
    /// Builds a value-taking argument from the constant.
    pub fn arg(&self, value_name: &'static str) -> Arg {
        Arg::new(self.name)
            .long(self.long)
            .value_name(value_name)
            .help(self.help)
    }
}

pub fn parse_non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

pub fn parse_from_str<U>(string: &str) -> Result<U, String>
where
    U: FromStr,
    U::Err: Display,
{
    parse_generic::<U, _>(string)
}

fn parse_generic<U, T>(string: T) -> Result<U, String>
where
    T: AsRef<str> + Display,
    U: FromStr,
    U::Err: Display,
{
    string
        .as_ref()
        .parse::<U>()
        .map_err(|err| format!("error parsing '{string}': {err}"))
}
