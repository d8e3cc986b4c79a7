use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use vue_i18n_sync::cli::{Arguments, ExitStatus, run_cli};

fn main() -> ExitCode {
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                    ExitStatus::Success.into()
                }
                ErrorKind::InvalidSubcommand => {
                    Arguments::print_usage();
                    ExitStatus::Success.into()
                }
                _ => {
                    let _ = err.print();
                    ExitStatus::Error.into()
                }
            };
        }
    };

    match run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
