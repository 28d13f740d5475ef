use crate::app_config::AppConfig;
use crate::commands::script::{run_script, ScriptError, ScriptSummary};
use crate::core::parking_system::ParkingSystem;
use dotenvy::dotenv;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

pub mod core;
pub mod commands;
pub mod app_config;

pub fn initialize_environment() {
    initialize_environment_from(None);
}

/// Loads `env_file` (or `.env` from the working directory), then starts the logger.
/// `RUST_LOG` may therefore come from the file.
pub fn initialize_environment_from(env_file: Option<&Path>) {
    let loaded = match env_file {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenv(),
    };

    if pretty_env_logger::try_init().is_err() {
        warn!("Logger was already initialized");
    }

    match loaded {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No environment file loaded: {}", e),
    }
}

/// Runs every command in `path` against a fresh lot, streaming results to `output`.
///
/// Failing to open the file aborts the run; everything after that is reported inline.
pub fn run_command_file<W: Write>(
    path: &Path,
    config: AppConfig,
    output: &mut W,
) -> Result<ScriptSummary, Box<dyn std::error::Error>> {
    let file = File::open(path).map_err(|source| ScriptError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Running commands from {}", path.display());

    let mut parking_system = ParkingSystem::new(config);
    let summary = run_script(&mut parking_system, BufReader::new(file), output)?;
    output.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_initialize_environment_reads_rust_log_from_env_file() {
        let temp_dir = TempDir::new().unwrap();
        let env_file = temp_dir.path().join(".env");
        fs::write(&env_file, "RUST_LOG=debug\n").unwrap();
        std::env::remove_var("RUST_LOG");

        initialize_environment_from(Some(&env_file));

        assert_eq!(std::env::var("RUST_LOG").unwrap(), "debug");
        assert_eq!(log::max_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_run_command_file_success() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "create_parking_lot 1").unwrap();
        writeln!(file, "park KA-01").unwrap();
        writeln!(file, "status").unwrap();

        let mut output = Vec::new();
        let summary = run_command_file(file.path(), AppConfig::default(), &mut output).unwrap();

        assert_eq!(summary.executed, 3);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Allocated slot number: 1\nSlot No. Registration No.\n1 KA-01\n"
        );
    }

    #[test]
    fn test_run_command_file_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let mut output = Vec::new();
        let result = run_command_file(&missing, AppConfig::default(), &mut output);

        let error = result.unwrap_err();
        assert!(error.to_string().starts_with("Error opening file:"));
        assert!(output.is_empty());
    }
}
