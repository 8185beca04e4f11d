//! log4rs setup for the binary.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialize logging from `config_file`, or a stderr console at warn level
/// when the file does not exist.
pub fn init_logging(config_file: &Path) -> Result<(), Box<dyn Error>> {
    if config_file.exists() {
        log4rs::init_file(config_file, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {config_file:?}: {e}"))?;
        log::debug!("log4rs initialized from {config_file:?}");
    } else {
        log4rs::init_config(fallback_config(LevelFilter::Warn)?)?;
        log::debug!("log4rs config {config_file:?} not found, logging to stderr");
    }
    Ok(())
}

fn fallback_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
