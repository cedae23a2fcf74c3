//! Script line parsing

use crate::error::ParseError;
use std::str::FromStr;

pub const CMD_CREATE_PARKING_LOT: &str = "create_parking_lot";
pub const CMD_PARK: &str = "park";
pub const CMD_LEAVE: &str = "leave";
pub const CMD_STATUS: &str = "status";

/// A validated script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create_parking_lot <capacity>`
    CreateParkingLot { capacity: usize },
    /// `park <registration>`
    Park { registration: String },
    /// `leave <registration> <hours>`
    Leave { registration: String, hours: i64 },
    /// `status`
    Status,
}

impl Command {
    /// Parse one script line
    ///
    /// # Returns
    /// * `Ok(Some(command))` - A valid command
    /// * `Ok(None)` - Blank line or `#` comment, nothing to run
    /// * `Err(ParseError)` - Unknown command, wrong arity or bad argument
    pub fn parse_line(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match name {
            CMD_CREATE_PARKING_LOT => {
                expect_args(CMD_CREATE_PARKING_LOT, &args, 1)?;
                let capacity = parse_int("capacity", args[0])?;
                if capacity <= 0 {
                    return Err(ParseError::NonPositiveCapacity(capacity));
                }
                let capacity = usize::try_from(capacity).map_err(|_| ParseError::InvalidInteger {
                    field: "capacity",
                    value: args[0].to_string(),
                })?;
                Command::CreateParkingLot { capacity }
            }
            CMD_PARK => {
                expect_args(CMD_PARK, &args, 1)?;
                Command::Park {
                    registration: registration(args[0])?,
                }
            }
            CMD_LEAVE => {
                expect_args(CMD_LEAVE, &args, 2)?;
                let registration = registration(args[0])?;
                let hours = parse_int("hours", args[1])?;
                if hours < 0 {
                    return Err(ParseError::NegativeHours(hours));
                }
                Command::Leave {
                    registration,
                    hours,
                }
            }
            CMD_STATUS => {
                expect_args(CMD_STATUS, &args, 0)?;
                Command::Status
            }
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };

        tracing::trace!(?command, "parsed command");
        Ok(Some(command))
    }

    /// Script keyword for this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateParkingLot { .. } => CMD_CREATE_PARKING_LOT,
            Command::Park { .. } => CMD_PARK,
            Command::Leave { .. } => CMD_LEAVE,
            Command::Status => CMD_STATUS,
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s)?.ok_or(ParseError::Empty)
    }
}

fn expect_args(command: &'static str, args: &[&str], expected: usize) -> Result<(), ParseError> {
    if args.len() != expected {
        return Err(ParseError::ArgumentCount {
            command,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

fn registration(token: &str) -> Result<String, ParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ParseError::EmptyRegistration);
    }
    Ok(token.to_string())
}
