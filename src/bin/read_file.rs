//! Prints the contents of a UTF-8 text file between header and footer lines.
//!
//! Usage: `read_file <path>`

use std::process::ExitCode;

use idgen::{config, logging, Error};

fn main() -> ExitCode {
    config::load_dotenv();
    let settings = config::Settings::from_env();
    logging::init(&settings.log_filter);

    let mut stdout = std::io::stdout().lock();
    match idgen::run_read_file(std::env::args_os(), &settings, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Cli(err)) => err.exit(),
        // Read failures were already reported on stdout.
        Err(Error::Read { .. }) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
