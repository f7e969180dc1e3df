//! Askpass helper for rusty-wit-gui.
//!
//! Shows a modal password prompt and hands the answer to whoever launched the
//! process, usually `sudo -A`. The answer goes to stdout; a cancelled prompt
//! exits with [`script::CANCEL_EXIT_CODE`].

pub mod backend;
pub mod config;
pub mod dialog;
pub mod error;
pub mod script;
