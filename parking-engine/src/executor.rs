//! Command dispatch against an owned parking lot

use crate::command::Command;
use crate::error::LotError;
use crate::fee::FeeSchedule;
use crate::lot::{LeaveOutcome, ParkOutcome, ParkingLot, SlotEntry};

/// What a second `create_parking_lot` does while a lot is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecreatePolicy {
    /// Fail with [`LotError::AlreadyCreated`] and keep the current lot (default)
    #[default]
    Reject,
    /// Discard the current lot and every parked vehicle, start a fresh one
    Reset,
}

/// Successful result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created {
        capacity: usize,
    },
    Parked {
        registration: String,
        outcome: ParkOutcome,
    },
    Left {
        registration: String,
        outcome: LeaveOutcome,
    },
    Status(Vec<SlotEntry>),
}

/// Runs commands one at a time against the lot it owns
///
/// Starts uninitialized; the first successful `create_parking_lot` makes it
/// active. Park, leave and status fail with [`LotError::NotCreated`] until
/// then.
#[derive(Debug, Default)]
pub struct Executor {
    lot: Option<ParkingLot>,
    recreate: RecreatePolicy,
    fees: FeeSchedule,
}

impl Executor {
    /// Create an executor with the default tariff and [`RecreatePolicy::Reject`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an executor whose lots use `fees` and follow `recreate`
    pub fn with_config(recreate: RecreatePolicy, fees: FeeSchedule) -> Self {
        Self {
            lot: None,
            recreate,
            fees,
        }
    }

    /// The active lot, if one has been created
    pub fn lot(&self) -> Option<&ParkingLot> {
        self.lot.as_ref()
    }

    pub fn recreate_policy(&self) -> RecreatePolicy {
        self.recreate
    }

    /// Execute a single command
    ///
    /// Lot-full and vehicle-not-found are reported inside the returned
    /// [`Outcome`]; only precondition violations are errors.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, LotError> {
        match command {
            Command::CreateParkingLot { capacity } => self.create(capacity),
            Command::Park { registration } => {
                let outcome = self.active_lot()?.park(&registration)?;
                Ok(Outcome::Parked {
                    registration,
                    outcome,
                })
            }
            Command::Leave {
                registration,
                hours,
            } => {
                let outcome = self.active_lot()?.leave(&registration, hours)?;
                Ok(Outcome::Left {
                    registration,
                    outcome,
                })
            }
            Command::Status => {
                let lot = self.lot.as_ref().ok_or(LotError::NotCreated)?;
                Ok(Outcome::Status(lot.status()))
            }
        }
    }

    fn create(&mut self, capacity: usize) -> Result<Outcome, LotError> {
        if let Some(existing) = &self.lot {
            match self.recreate {
                RecreatePolicy::Reject => {
                    return Err(LotError::AlreadyCreated {
                        capacity: existing.capacity(),
                    });
                }
                RecreatePolicy::Reset => {
                    tracing::info!(
                        previous_capacity = existing.capacity(),
                        discarded = existing.occupied_count(),
                        "resetting parking lot"
                    );
                }
            }
        }

        self.lot = Some(ParkingLot::with_fee_schedule(capacity, self.fees)?);
        Ok(Outcome::Created { capacity })
    }

    fn active_lot(&mut self) -> Result<&mut ParkingLot, LotError> {
        self.lot.as_mut().ok_or(LotError::NotCreated)
    }
}
