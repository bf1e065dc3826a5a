//! Writes a fixed text payload to `output.txt` in the working directory.
//!
//! Usage: `write_output`

use std::process::ExitCode;

use idgen::{config, logging, Error};

fn main() -> ExitCode {
    config::load_dotenv();
    let settings = config::Settings::from_env();
    logging::init(&settings.log_filter);

    let mut stdout = std::io::stdout().lock();
    match idgen::run_write_output(std::env::args_os(), &settings, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Cli(err)) => err.exit(),
        // Write failures were already reported on stdout.
        Err(Error::Write { .. }) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
