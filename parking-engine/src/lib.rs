//! Parking Lot Engine
//!
//! Simulates a fixed-capacity parking lot that always hands arriving vehicles
//! the nearest (lowest-numbered) free slot and charges a tiered fee when they
//! leave.
//!
//! # Overview
//!
//! This library provides:
//! - [`SlotAllocator`]: a binary min-heap of free slots, O(log n) take and release
//! - [`ParkingLot`]: slot allocation plus slot/vehicle lookup tables kept in sync
//! - [`FeeSchedule`]: the flat-then-hourly tariff
//! - [`Command`]: parsing of script lines such as `park KA-01-HH-1234`
//! - [`Executor`]: dispatch of parsed commands to an owned lot
//!
//! # Quick Example
//!
//! ```
//! use parking_engine::{Command, Executor, LeaveOutcome, Outcome, ParkOutcome};
//!
//! let mut executor = Executor::new();
//! for line in ["create_parking_lot 2", "park KA-01-HH-1234", "park KA-01-HH-9999"] {
//!     let command = Command::parse_line(line).unwrap().unwrap();
//!     executor.execute(command).unwrap();
//! }
//!
//! let outcome = executor.execute("leave KA-01-HH-1234 4".parse().unwrap()).unwrap();
//! assert_eq!(
//!     outcome,
//!     Outcome::Left {
//!         registration: "KA-01-HH-1234".to_string(),
//!         outcome: LeaveOutcome::Freed { slot: 1, charge: 30 },
//!     }
//! );
//!
//! let outcome = executor.execute("park KA-01-BB-0001".parse().unwrap()).unwrap();
//! assert!(matches!(
//!     outcome,
//!     Outcome::Parked { outcome: ParkOutcome::Allocated { slot: 1 }, .. }
//! ));
//! ```
//!
//! # Outcomes versus errors
//!
//! A full lot on `park` and an unknown vehicle on `leave` are ordinary
//! outcomes ([`ParkOutcome::LotFull`], [`LeaveOutcome::NotFound`]). Errors
//! ([`LotError`]) are reserved for precondition violations: parking a vehicle
//! twice, negative hours, or using the lot before it exists.

mod allocator;
mod command;
mod error;
mod executor;
mod fee;
mod lot;

// Re-export public API
pub use allocator::SlotAllocator;
pub use command::{CMD_CREATE_PARKING_LOT, CMD_LEAVE, CMD_PARK, CMD_STATUS, Command};
pub use error::{AllocatorError, LotError, ParseError};
pub use executor::{Executor, Outcome, RecreatePolicy};
pub use fee::{ADDITIONAL_RATE, BASE_CHARGE, BASE_HOURS, FeeSchedule, compute_fee};
pub use lot::{LeaveOutcome, ParkOutcome, ParkingLot, SlotEntry};
