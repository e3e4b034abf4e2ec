use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use subnet_calculator::cli::{self, Cli};
use subnet_calculator::config::Config;
use subnet_calculator::logging;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let (config, rejected) = Config::from_env();
    logging::init(&config)?;
    for message in &rejected {
        log::warn!("{message}");
    }
    if !config.color {
        colored::control::set_override(false);
    }
    log::info!("#Start main()");

    let args = Cli::parse();
    match cli::run(&args, &config) {
        Ok(out) => {
            print!("{out}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::warn!("{e}");
            let format = args.format.unwrap_or(config.format);
            eprint!("{}", cli::render_error(&e, format));
            Ok(ExitCode::FAILURE)
        }
    }
}
