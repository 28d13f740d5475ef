use std::io::{self, Write};

/// One parsed line of a command file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateParkingLot {
        capacity: usize,
    },
    Park {
        registration_number: String,
    },
    Leave {
        registration_number: String,
        hours: u32,
    },
    Status,
}

impl Command {
    pub fn verb(&self) -> &'static str {
        match self {
            Command::CreateParkingLot { .. } => "create_parking_lot",
            Command::Park { .. } => "park",
            Command::Leave { .. } => "leave",
            Command::Status => "status",
        }
    }
}

/// Runs a command and streams its user-facing output.
///
/// Domain failures are part of the output; only write failures surface as `Err`.
pub trait CommandExecutor {
    fn execute_command<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<()>;
}
