use colored::Colorize;

use crate::scaffold::{Outcome, Reporter};

/// Prints created files to stdout and skipped ones to stderr.
pub(super) struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn report(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Created(_) => println!("{}", notice(outcome)),
            Outcome::AlreadyExists(_) => eprintln!("{}", notice(outcome)),
        }
    }
}

pub(super) fn notice(outcome: &Outcome) -> String {
    let path = outcome.path().display().to_string().bold().red();
    match outcome {
        Outcome::Created(_) => format!("{path} creation complete."),
        Outcome::AlreadyExists(_) => format!("{path} file already exists."),
    }
}

pub(super) fn command_not_found() -> String {
    "The command could not be found."
        .bold()
        .red()
        .to_string()
}

pub(super) fn exit_notice() -> String {
    "Exit the terminal.".truecolor(128, 128, 128).to_string()
}
