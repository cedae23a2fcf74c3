//! Tiered parking charges

/// Hours covered by the flat base charge
pub const BASE_HOURS: u64 = 2;
/// Flat charge for the first `BASE_HOURS`
pub const BASE_CHARGE: u64 = 10;
/// Charge per hour past `BASE_HOURS`
pub const ADDITIONAL_RATE: u64 = 10;

/// Tariff applied when a vehicle leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    pub base_hours: u64,
    pub base_charge: u64,
    pub additional_rate: u64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            base_hours: BASE_HOURS,
            base_charge: BASE_CHARGE,
            additional_rate: ADDITIONAL_RATE,
        }
    }
}

impl FeeSchedule {
    /// Charge for a stay of `hours`
    ///
    /// Anything up to `base_hours` (including zero) costs `base_charge`.
    /// Saturates at `u64::MAX` rather than overflowing.
    pub fn compute(&self, hours: u64) -> u64 {
        let extra_hours = hours.saturating_sub(self.base_hours);
        self.base_charge
            .saturating_add(extra_hours.saturating_mul(self.additional_rate))
    }
}

/// Charge for `hours` under the default tariff
pub fn compute_fee(hours: u64) -> u64 {
    FeeSchedule::default().compute(hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fee_table() {
        let table = [
            (0, 10),
            (1, 10),
            (2, 10),
            (3, 20),
            (4, 30),
            (5, 40),
            (6, 50),
            (10, 90),
        ];
        for (hours, expected) in table {
            assert_eq!(compute_fee(hours), expected, "hours = {hours}");
        }
    }

    #[test]
    fn test_custom_schedule() {
        let fees = FeeSchedule {
            base_hours: 1,
            base_charge: 5,
            additional_rate: 3,
        };
        assert_eq!(fees.compute(0), 5);
        assert_eq!(fees.compute(1), 5);
        assert_eq!(fees.compute(4), 14);
    }

    #[test]
    fn test_huge_stay_saturates() {
        assert_eq!(compute_fee(u64::MAX), u64::MAX);
    }
}
