use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

struct TestEnv {
    home: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            home: TempDir::new().expect("create temp home"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("wit-askpass");
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn confirmed_password_is_printed() {
    TestEnv::new()
        .cmd()
        .args(["--backend", "stdin"])
        .write_stdin("secret123\n")
        .assert()
        .success()
        .stdout("secret123\n");
}

#[test]
fn empty_password_is_accepted() {
    TestEnv::new()
        .cmd()
        .args(["--backend", "stdin"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn cancel_exits_255_without_output() {
    TestEnv::new()
        .cmd()
        .args(["--backend", "stdin"])
        .write_stdin("")
        .assert()
        .code(255)
        .stdout("");
}

#[test]
fn unterminated_input_cancels() {
    TestEnv::new()
        .cmd()
        .args(["--backend", "stdin"])
        .write_stdin("secret123")
        .assert()
        .code(255)
        .stdout("");
}

#[test]
fn sudo_prompt_argument_is_accepted() {
    TestEnv::new()
        .cmd()
        .args(["--backend", "stdin", "[sudo] password for wii: "])
        .write_stdin("pw\n")
        .assert()
        .success()
        .stdout("pw\n");
}

#[test]
fn backend_from_config_file() {
    let env = TestEnv::new();
    let config = env.home.path().join("askpass.yml");
    fs::write(&config, "backend: stdin\n").unwrap();
    env.cmd()
        .arg("--config")
        .arg(&config)
        .write_stdin("from-config\n")
        .assert()
        .success()
        .stdout("from-config\n");
}

#[test]
fn missing_config_file_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--backend", "stdin", "--config"])
        .arg(env.home.path().join("nope.yml"))
        .write_stdin("pw\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("ConfigIo"));
}

#[test]
fn print_script_shows_fixed_dialog() {
    TestEnv::new()
        .cmd()
        .arg("--print-script")
        .assert()
        .success()
        .stdout(contains("#!/usr/bin/env osascript -l JavaScript\n"))
        .stdout(contains("  buttons: [\"Cancel\",\"Ok\"],\n"))
        .stdout(contains("  defaultButton: \"Ok\",\n"))
        .stdout(contains("  hiddenAnswer: true,\n"))
        .stdout(contains("  withIcon: \"caution\",\n"))
        .stdout(contains("$.exit(255)"));
}

#[test]
fn unknown_backend_is_usage_error() {
    TestEnv::new()
        .cmd()
        .args(["--backend", "gui"])
        .assert()
        .code(2)
        .stderr(contains("unknown backend"));
}
