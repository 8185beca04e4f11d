use clap::Parser;
use colored::Colorize;
use ipv4_subnet_calc::cli::{self, Args};
use ipv4_subnet_calc::config::Config;
use ipv4_subnet_calc::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = init_logging(&config.log_config) {
        eprintln!("{} {e}", "Warning:".yellow());
    }
    log::info!("#Start main() {:?}", args.command);

    match cli::run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {e}");
            eprintln!("{} {e}", "Error:".red());
            ExitCode::FAILURE
        }
    }
}
