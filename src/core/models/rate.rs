/// Flat charge for the first `base_hours`, then `hourly_charge` for every hour beyond.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateCard {
    base_charge: u64,
    base_hours: u32,
    hourly_charge: u64,
}

impl RateCard {
    pub fn new(base_charge: u64, base_hours: u32, hourly_charge: u64) -> Self {
        Self { base_charge, base_hours, hourly_charge }
    }

    pub fn charge_for(&self, hours: u32) -> u64 {
        let extra_hours = u64::from(hours.saturating_sub(self.base_hours));
        self.base_charge
            .saturating_add(extra_hours.saturating_mul(self.hourly_charge))
    }
}

impl Default for RateCard {
    fn default() -> Self {
        Self::new(10, 2, 10)
    }
}
