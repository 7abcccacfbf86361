use dyr_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    logging::init_logging_or_stderr("dyr");

    match CliCommand::run_from_args() {
        Ok(true) => {}
        // The command already reported the failure itself.
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("dyr error: {:#}", err);
            std::process::exit(1);
        }
    }
}
