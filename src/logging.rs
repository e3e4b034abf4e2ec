//! Logger setup for the binary.
//!
//! Uses the log4rs YAML file from the config when it exists, otherwise a
//! stderr console appender at `warn`. Logs never go to stdout, which carries
//! the results.

use crate::config::Config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Fallback log4rs config: stderr only.
pub fn fallback_config(level: LevelFilter) -> Result<log4rs::Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

pub fn init(config: &Config) -> Result<(), Box<dyn Error>> {
    if config.log_config.exists() {
        log4rs::init_file(&config.log_config, Default::default())?;
        log::debug!("Logging configured from {}", config.log_config.display());
    } else {
        log4rs::init_config(fallback_config(LevelFilter::Warn)?)?;
        log::debug!(
            "No log config at {}, logging to stderr",
            config.log_config.display()
        );
    }
    Ok(())
}
