//! Binary entrypoint for the `idgen` CLI.

use std::process::ExitCode;

use idgen::{config, logging, Error};

fn main() -> ExitCode {
    config::load_dotenv();
    let settings = config::Settings::from_env();
    logging::init(&settings.log_filter);

    let mut stdout = std::io::stdout().lock();
    match idgen::run(std::env::args_os(), &settings, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Cli(err)) => err.exit(),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
