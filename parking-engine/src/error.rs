//! Error types for the parking engine

use thiserror::Error;

/// Error type for tokenizing and validating a single script line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// First token is not a known command
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// Wrong number of arguments for a known command
    #[error("{command} requires exactly {expected} argument(s), got {got}")]
    ArgumentCount {
        command: &'static str,
        expected: usize,
        got: usize,
    },
    /// Argument that should be an integer is not one
    #[error("invalid {field}: {value} (must be an integer)")]
    InvalidInteger { field: &'static str, value: String },
    /// Capacity of zero or less
    #[error("capacity must be positive, got: {0}")]
    NonPositiveCapacity(i64),
    /// Negative number of hours on leave
    #[error("hours cannot be negative, got: {0}")]
    NegativeHours(i64),
    /// Registration number is blank
    #[error("registration number cannot be empty")]
    EmptyRegistration,
    /// Line contains no command at all
    #[error("empty command line")]
    Empty,
}

/// Error type for operations on a parking lot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotError {
    /// A park, leave or status command arrived before `create_parking_lot`
    #[error("parking lot has not been created")]
    NotCreated,
    /// A second `create_parking_lot` while a lot is active
    #[error("parking lot already exists with {capacity} slots")]
    AlreadyCreated { capacity: usize },
    /// The vehicle already holds a slot
    #[error("vehicle {0} is already parked")]
    AlreadyParked(String),
    /// Negative parking duration
    #[error("parking hours cannot be negative: {0}")]
    InvalidHours(i64),
    /// Lot created with no slots
    #[error("parking lot capacity must be positive, got: {0}")]
    InvalidCapacity(usize),
    /// Lot too large to hold in memory
    #[error("parking lot capacity too large: {0}")]
    CapacityTooLarge(usize),
}

/// Error type for the free-slot allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocatorError {
    /// No free slot is left to hand out
    #[error("no free slots remain")]
    Empty,
    /// Slot tables for this many slots cannot be allocated
    #[error("cannot allocate {0} slots")]
    CapacityTooLarge(usize),
}
