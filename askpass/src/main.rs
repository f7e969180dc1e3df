use clap::{Arg, ArgAction, ArgMatches, Command, crate_description, crate_name, crate_version};
use log::{debug, info};
use std::error;
use std::io::{self, Write};
use std::process;
use wit_askpass::backend::{Backend, POSSIBLE_BACKENDS, PasswordPrompt};
use wit_askpass::config::Config;
use wit_askpass::dialog::{DialogSpec, Icon, Outcome};
use wit_askpass::script::{self, CANCEL_EXIT_CODE};
use wit_askpass_clap_utils::{ArgConstant, parse_from_str, parse_non_empty};

const CONFIG_FILE: &str = "config_file";
const CALLER_PROMPT: &str = "prompt";

const BACKEND_ARG: ArgConstant<'static> = ArgConstant {
    long: "backend",
    name: "backend",
    help: "How to show the prompt [default: auto]",
};

const MESSAGE_ARG: ArgConstant<'static> = ArgConstant {
    long: "message",
    name: "message",
    help: "Text shown in the dialog instead of the built-in message",
};

const TITLE_ARG: ArgConstant<'static> = ArgConstant {
    long: "title",
    name: "title",
    help: "Dialog window title",
};

const ICON_ARG: ArgConstant<'static> = ArgConstant {
    long: "icon",
    name: "icon",
    help: "Dialog icon: note, caution or stop [default: caution]",
};

const USE_CALLER_PROMPT_ARG: ArgConstant<'static> = ArgConstant {
    long: "use-caller-prompt",
    name: "use_caller_prompt",
    help: "Show the PROMPT passed by the caller instead of the built-in message",
};

const PRINT_SCRIPT_ARG: ArgConstant<'static> = ArgConstant {
    long: "print-script",
    name: "print_script",
    help: "Print the osascript askpass program and exit without prompting",
};

fn app() -> Command {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new(CONFIG_FILE)
                .short('C')
                .long("config")
                .value_name("FILEPATH")
                .help("Configuration file to use"),
        )
        .arg(
            BACKEND_ARG
                .arg("BACKEND")
                .value_parser(parse_from_str::<Backend>)
                .long_help(format!(
                    "How to show the prompt, one of: {}",
                    POSSIBLE_BACKENDS.join(", ")
                )),
        )
        .arg(MESSAGE_ARG.arg("TEXT").value_parser(parse_non_empty))
        .arg(TITLE_ARG.arg("TEXT").value_parser(parse_non_empty))
        .arg(ICON_ARG.arg("ICON").value_parser(parse_from_str::<Icon>))
        .arg(
            Arg::new(USE_CALLER_PROMPT_ARG.name)
                .long(USE_CALLER_PROMPT_ARG.long)
                .action(ArgAction::SetTrue)
                .requires(CALLER_PROMPT)
                .help(USE_CALLER_PROMPT_ARG.help),
        )
        .arg(
            Arg::new(PRINT_SCRIPT_ARG.name)
                .long(PRINT_SCRIPT_ARG.long)
                .action(ArgAction::SetTrue)
                .help(PRINT_SCRIPT_ARG.help),
        )
        .arg(
            Arg::new(CALLER_PROMPT)
                .value_name("PROMPT")
                .help("Prompt text passed by sudo; ignored unless --use-caller-prompt is set"),
        )
}

fn main() -> Result<(), Box<dyn error::Error>> {
    solana_logger::setup_with_default("warn");

    let matches = app().try_get_matches().unwrap_or_else(|e| e.exit());

    let config = if let Some(config_file) = matches.try_get_one::<String>(CONFIG_FILE)? {
        Config::load(config_file)?
    } else {
        Config::load_default()?
    };

    let spec = dialog_spec(&matches, &config)?;

    if matches.get_flag(PRINT_SCRIPT_ARG.name) {
        print!("{}", script::render_executable(&spec));
        return Ok(());
    }

    let backend = matches
        .try_get_one::<Backend>(BACKEND_ARG.name)?
        .copied()
        .or(config.backend)
        .unwrap_or_default();
    let prompt: Box<dyn PasswordPrompt> = backend.into_prompt()?;

    match prompt.prompt(&spec)? {
        Outcome::Confirmed(answer) => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", answer.as_str())?;
            stdout.flush()?;
        }
        Outcome::Cancelled => {
            info!("password prompt cancelled");
            process::exit(CANCEL_EXIT_CODE);
        }
    }

    Ok(())
}

/// Command line options win over the config file, which wins over the
/// built-in password prompt.
fn dialog_spec(matches: &ArgMatches, config: &Config) -> Result<DialogSpec, Box<dyn error::Error>> {
    let caller_prompt = matches.try_get_one::<String>(CALLER_PROMPT)?;
    if let Some(caller_prompt) = caller_prompt {
        debug!("caller prompt: {caller_prompt:?}");
    }

    let message = if let Some(message) = matches.try_get_one::<String>(MESSAGE_ARG.name)? {
        Some(message.clone())
    } else if matches.get_flag(USE_CALLER_PROMPT_ARG.name) {
        caller_prompt.cloned()
    } else {
        config.message.clone()
    };
    let title = matches
        .try_get_one::<String>(TITLE_ARG.name)?
        .cloned()
        .or_else(|| config.title.clone());
    let icon = matches
        .try_get_one::<Icon>(ICON_ARG.name)?
        .copied()
        .or(config.icon)
        .unwrap_or_default();

    let mut spec = DialogSpec::password_prompt().with_title(title).with_icon(icon);
    if let Some(message) = message {
        spec = spec.with_message(message);
    }
    Ok(spec)
}
