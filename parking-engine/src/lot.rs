//! Parking lot state: slot allocation plus the slot/vehicle lookup tables

use crate::allocator::SlotAllocator;
use crate::error::LotError;
use crate::fee::FeeSchedule;
use itertools::Itertools;
use std::collections::HashMap;

/// Result of a park request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParkOutcome {
    /// The vehicle now occupies `slot`
    Allocated { slot: usize },
    /// No slot was free; nothing changed
    LotFull,
}

/// Result of a leave request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// The vehicle left `slot` and owes `charge`
    Freed { slot: usize, charge: u64 },
    /// No such vehicle is parked; nothing changed
    NotFound,
}

/// One occupied slot as reported by [`ParkingLot::status`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEntry {
    pub slot: usize,
    pub registration: String,
}

/// A fixed-capacity parking lot
///
/// Keeps three views in sync:
/// - the free slots, handed out smallest first
/// - occupied slot -> registration
/// - registration -> occupied slot
///
/// Every slot is either free or occupied, and the two maps are exact
/// inverses of each other.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    capacity: usize,
    available: SlotAllocator,
    occupied: HashMap<usize, String>,
    vehicles: HashMap<String, usize>,
    fees: FeeSchedule,
}

impl ParkingLot {
    /// Create a lot with `capacity` slots and the default tariff
    pub fn new(capacity: usize) -> Result<Self, LotError> {
        Self::with_fee_schedule(capacity, FeeSchedule::default())
    }

    /// Create a lot with `capacity` slots charging according to `fees`
    pub fn with_fee_schedule(capacity: usize, fees: FeeSchedule) -> Result<Self, LotError> {
        if capacity == 0 {
            return Err(LotError::InvalidCapacity(capacity));
        }

        let available = SlotAllocator::try_new(capacity)
            .map_err(|_| LotError::CapacityTooLarge(capacity))?;

        tracing::debug!(capacity, "creating parking lot");
        Ok(Self {
            capacity,
            available,
            occupied: HashMap::new(),
            vehicles: HashMap::new(),
            fees,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn fee_schedule(&self) -> FeeSchedule {
        self.fees
    }

    /// Slot held by `registration`, if parked
    pub fn slot_of(&self, registration: &str) -> Option<usize> {
        self.vehicles.get(registration).copied()
    }

    /// Registration parked in `slot`, if occupied
    pub fn vehicle_at(&self, slot: usize) -> Option<&str> {
        self.occupied.get(&slot).map(String::as_str)
    }

    /// Park a vehicle in the lowest-numbered free slot
    ///
    /// # Returns
    /// * `Ok(ParkOutcome::Allocated { slot })` - The vehicle now holds `slot`
    /// * `Ok(ParkOutcome::LotFull)` - Every slot is taken
    /// * `Err(LotError::AlreadyParked)` - The vehicle already holds a slot
    pub fn park(&mut self, registration: &str) -> Result<ParkOutcome, LotError> {
        if self.vehicles.contains_key(registration) {
            return Err(LotError::AlreadyParked(registration.to_string()));
        }

        let Ok(slot) = self.available.take_smallest() else {
            tracing::debug!(registration, "lot full");
            return Ok(ParkOutcome::LotFull);
        };

        self.occupied.insert(slot, registration.to_string());
        self.vehicles.insert(registration.to_string(), slot);
        tracing::debug!(registration, slot, "allocated slot");
        Ok(ParkOutcome::Allocated { slot })
    }

    /// Release the slot held by `registration` and charge for `hours`
    ///
    /// # Returns
    /// * `Ok(LeaveOutcome::Freed { slot, charge })` - The slot is free again
    /// * `Ok(LeaveOutcome::NotFound)` - The vehicle is not parked here
    /// * `Err(LotError::InvalidHours)` - `hours` is negative
    pub fn leave(&mut self, registration: &str, hours: i64) -> Result<LeaveOutcome, LotError> {
        let hours = u64::try_from(hours).map_err(|_| LotError::InvalidHours(hours))?;

        let Some(slot) = self.vehicles.remove(registration) else {
            tracing::debug!(registration, "vehicle not found");
            return Ok(LeaveOutcome::NotFound);
        };

        let charge = self.fees.compute(hours);
        self.occupied.remove(&slot);
        self.available.release(slot);
        tracing::debug!(registration, slot, hours, charge, "released slot");
        Ok(LeaveOutcome::Freed { slot, charge })
    }

    /// Occupied slots in ascending slot order
    pub fn status(&self) -> Vec<SlotEntry> {
        self.occupied
            .iter()
            .map(|(&slot, registration)| SlotEntry {
                slot,
                registration: registration.clone(),
            })
            .sorted_unstable_by_key(|entry| entry.slot)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot_with(capacity: usize, vehicles: &[&str]) -> ParkingLot {
        let mut lot = ParkingLot::new(capacity).unwrap();
        for v in vehicles {
            lot.park(v).unwrap();
        }
        lot
    }

    fn assert_consistent(lot: &ParkingLot) {
        assert_eq!(lot.occupied_count() + lot.available_count(), lot.capacity());
        assert_eq!(lot.occupied.len(), lot.vehicles.len());
        for (slot, reg) in &lot.occupied {
            assert_eq!(lot.vehicles.get(reg), Some(slot));
            assert!(!lot.available.contains(*slot));
        }
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            ParkingLot::new(0).unwrap_err(),
            LotError::InvalidCapacity(0)
        );
    }

    #[test]
    fn test_oversized_capacity_rejected() {
        let capacity = i64::MAX as usize;
        assert_eq!(
            ParkingLot::new(capacity).unwrap_err(),
            LotError::CapacityTooLarge(capacity)
        );
    }

    #[test]
    fn test_park_assigns_ascending_slots() {
        let mut lot = ParkingLot::new(3).unwrap();
        for (i, car) in ["KA-01-HH-1234", "KA-01-HH-9999", "KA-01-BB-0001"]
            .into_iter()
            .enumerate()
        {
            assert_eq!(
                lot.park(car),
                Ok(ParkOutcome::Allocated { slot: i + 1 })
            );
            assert_eq!(lot.slot_of(car), Some(i + 1));
            assert_eq!(lot.vehicle_at(i + 1), Some(car));
        }
        assert_consistent(&lot);
    }

    #[test]
    fn test_full_lot_is_not_an_error() {
        let mut lot = lot_with(1, &["A"]);
        assert_eq!(lot.park("B"), Ok(ParkOutcome::LotFull));
        assert_eq!(lot.slot_of("A"), Some(1));
        assert_eq!(lot.slot_of("B"), None);
        assert_consistent(&lot);
    }

    #[test]
    fn test_double_park_rejected() {
        let mut lot = lot_with(3, &["A"]);
        assert_eq!(lot.park("A"), Err(LotError::AlreadyParked("A".into())));
        assert_eq!(lot.occupied_count(), 1);
        assert_eq!(lot.available_count(), 2);
    }

    #[test]
    fn test_leave_frees_slot_and_charges() {
        let mut lot = lot_with(3, &["A", "B"]);
        assert_eq!(
            lot.leave("B", 4),
            Ok(LeaveOutcome::Freed { slot: 2, charge: 30 })
        );
        assert_eq!(lot.slot_of("B"), None);
        assert_eq!(lot.vehicle_at(2), None);
        assert_consistent(&lot);
    }

    #[test]
    fn test_leave_unknown_vehicle() {
        let mut lot = lot_with(2, &["A"]);
        assert_eq!(lot.leave("GHOST", 3), Ok(LeaveOutcome::NotFound));
        assert_eq!(lot.slot_of("A"), Some(1));
        assert_consistent(&lot);
    }

    #[test]
    fn test_negative_hours_rejected_before_lookup() {
        let mut lot = lot_with(2, &["A"]);
        assert_eq!(lot.leave("A", -1), Err(LotError::InvalidHours(-1)));
        assert_eq!(lot.slot_of("A"), Some(1));
    }

    #[test]
    fn test_freed_slots_reused_smallest_first() {
        let mut lot = lot_with(5, &["CAR1", "CAR2", "CAR3", "CAR4", "CAR5"]);
        lot.leave("CAR2", 1).unwrap();
        lot.leave("CAR4", 1).unwrap();

        assert_eq!(lot.park("CAR6"), Ok(ParkOutcome::Allocated { slot: 2 }));
        assert_eq!(lot.park("CAR7"), Ok(ParkOutcome::Allocated { slot: 4 }));
        assert_eq!(lot.park("CAR8"), Ok(ParkOutcome::LotFull));
        assert_consistent(&lot);
    }

    #[test]
    fn test_status_lists_occupied_in_order() {
        let mut lot = lot_with(3, &["A", "B"]);
        lot.leave("A", 0).unwrap();
        assert_eq!(
            lot.status(),
            vec![SlotEntry {
                slot: 2,
                registration: "B".to_string()
            }]
        );
    }

    #[test]
    fn test_custom_fee_schedule_applies() {
        let fees = FeeSchedule {
            base_hours: 0,
            base_charge: 0,
            additional_rate: 7,
        };
        let mut lot = ParkingLot::with_fee_schedule(1, fees).unwrap();
        lot.park("A").unwrap();
        assert_eq!(
            lot.leave("A", 3),
            Ok(LeaveOutcome::Freed { slot: 1, charge: 21 })
        );
    }
}
