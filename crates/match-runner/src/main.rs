use std::io;

mod config;
mod display;
mod engine;
mod error;
mod match_runner;
mod statistics;

use config::Config;
use error::MatchRunnerError;
use log::LevelFilter;
use match_runner::MatchRunner;

fn main() -> io::Result<()> {
    let config = Config::parse_args();

    let level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let result = MatchRunner::new(&config).and_then(|mut runner| runner.run_match(&config));
    if let Err(e) = result {
        match e {
            MatchRunnerError::Io(io_err) => return Err(io_err),
            _ => {
                eprintln!("Error: {e}");
                return Ok(());
            }
        }
    }

    Ok(())
}
