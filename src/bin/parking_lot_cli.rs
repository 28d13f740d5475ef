// src/bin/parking_lot_cli.rs

use clap::Parser;
use log::error;
use parking_lot_sim::{initialize_environment, run_command_file};
use parking_lot_sim::app_config::AppConfig;
use std::path::PathBuf;
use std::process::ExitCode;

/// Simulates a parking lot by replaying a file of commands
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// File with one command per line: create_parking_lot N, park REG, leave REG HOURS, status
    input_file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    initialize_environment();

    let config = match AppConfig::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    match run_command_file(&args.input_file, config, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Run aborted for {}: {}", args.input_file.display(), e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
