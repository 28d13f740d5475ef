use std::fmt;

/// A successful park: the vehicle and the 1-based slot it was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub registration_number: String,
    pub slot: usize,
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Allocated slot number: {}", self.slot)
    }
}

/// A successful leave, with the slot that was freed and what was charged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Departure {
    pub registration_number: String,
    pub slot: usize,
    pub hours: u32,
    pub charge: u64,
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registration number {} with Slot Number {} is free with Charge ${}",
            self.registration_number, self.slot, self.charge
        )
    }
}
