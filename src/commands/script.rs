// src/commands/script.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use log::{debug, info, warn};

use crate::core::parking_system::ParkingSystem;
use super::common::{Command, CommandExecutor};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),

    #[error("Invalid hours: {0}")]
    InvalidHours(String),

    #[error("Error opening file: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading file: {0}")]
    Read(#[source] io::Error),
}

const CREATE_USAGE: &str = "create_parking_lot <capacity>";
const PARK_USAGE: &str = "park <registration_number>";
const LEAVE_USAGE: &str = "leave <registration_number> <hours>";

/// Counters for one script run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSummary {
    pub executed: usize,
    pub rejected: usize,
}

/// Parses one line into a command. Blank lines and `#` comments yield `Ok(None)`.
/// Extra trailing tokens are ignored.
pub fn parse_line(line: &str) -> Result<Option<Command>, ScriptError> {
    let mut tokens = line.split_whitespace();
    let verb = match tokens.next() {
        Some(verb) if !verb.starts_with('#') => verb.to_lowercase(),
        _ => return Ok(None),
    };

    let command = match verb.as_str() {
        "create_parking_lot" => {
            let raw = tokens.next().ok_or(ScriptError::Usage(CREATE_USAGE))?;
            let capacity = raw
                .parse::<usize>()
                .map_err(|_| ScriptError::InvalidCapacity(raw.to_string()))?;
            Command::CreateParkingLot { capacity }
        },
        "park" => {
            let registration_number = tokens.next().ok_or(ScriptError::Usage(PARK_USAGE))?;
            Command::Park { registration_number: registration_number.to_string() }
        },
        "leave" => {
            let (registration_number, raw_hours) = match (tokens.next(), tokens.next()) {
                (Some(registration_number), Some(raw_hours)) => (registration_number, raw_hours),
                _ => return Err(ScriptError::Usage(LEAVE_USAGE)),
            };
            let hours = raw_hours
                .parse::<u32>()
                .map_err(|_| ScriptError::InvalidHours(raw_hours.to_string()))?;
            Command::Leave { registration_number: registration_number.to_string(), hours }
        },
        "status" => Command::Status,
        _ => return Err(ScriptError::UnknownCommand(verb)),
    };

    Ok(Some(command))
}

impl CommandExecutor for ParkingSystem {
    fn execute_command<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<()> {
        debug!("Executing {}: {:?}", command.verb(), command);

        // create_parking_lot reports only failures
        let message = match command {
            Command::CreateParkingLot { capacity } => self
                .create_parking_lot(capacity)
                .map(|_| None),
            Command::Park { registration_number } => self
                .park(&registration_number)
                .map(|allocation| Some(allocation.to_string())),
            Command::Leave { registration_number, hours } => self
                .leave(&registration_number, hours)
                .map(|departure| Some(departure.to_string())),
            Command::Status => self.status().map(Some),
        };

        match message {
            Ok(Some(message)) => writeln!(output, "{}", message),
            Ok(None) => Ok(()),
            Err(e) => {
                debug!("Command rejected: {}", e);
                writeln!(output, "{}", e)
            }
        }
    }
}

/// Feeds every line of `reader` through the parser and into `parking_system`.
///
/// Lines are split on raw bytes and decoded lossily, so invalid UTF-8 only
/// affects the line it appears on. Parse failures are reported on `output`
/// and skipped. A read failure is reported and ends the run. Only write
/// failures are returned as `Err`.
pub fn run_script<R: BufRead, W: Write>(
    parking_system: &mut ParkingSystem,
    mut reader: R,
    output: &mut W,
) -> io::Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => line_number += 1,
            Err(e) => {
                warn!("Stopped reading after line {}: {}", line_number, e);
                writeln!(output, "{}", ScriptError::Read(e))?;
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        match parse_line(&line) {
            Ok(Some(command)) => {
                parking_system.execute_command(command, output)?;
                summary.executed += 1;
            },
            Ok(None) => {},
            Err(e) => {
                debug!("Skipping line {}: {}", line_number, e);
                writeln!(output, "{}", e)?;
                summary.rejected += 1;
            },
        }
    }

    info!("Script finished: {} commands executed, {} lines rejected", summary.executed, summary.rejected);
    Ok(summary)
}
