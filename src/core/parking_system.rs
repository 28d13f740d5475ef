// src/core/parking_system.rs

use crate::app_config::AppConfig;
use crate::core::models::{Allocation, Departure, Vehicle};
use crate::core::reporting;
use crate::core::state::ParkingLotState;

use log::{debug, info, warn};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParkingError {
    #[error("Error: Parking lot not created yet.")]
    LotNotCreated,

    #[error("Sorry, parking lot is full")]
    LotFull,

    #[error("Registration number {0} not found")]
    NotFound(String),

    #[error("Registration number {registration_number} is already parked at slot {slot}")]
    AlreadyParked { registration_number: String, slot: usize },

    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),
}

/// Owns the (optional) lot and applies the four lot operations to it.
pub struct ParkingSystem {
    lot: Option<ParkingLotState>,
    config: AppConfig,
}

impl ParkingSystem {
    pub fn new(config: AppConfig) -> Self {
        Self {
            lot: None,
            config,
        }
    }

    pub fn lot(&self) -> Option<&ParkingLotState> {
        self.lot.as_ref()
    }

    fn lot_mut(&mut self) -> Result<&mut ParkingLotState, ParkingError> {
        self.lot.as_mut().ok_or(ParkingError::LotNotCreated)
    }

    /// (Re)initializes the lot with `capacity` empty slots.
    pub fn create_parking_lot(&mut self, capacity: usize) -> Result<usize, ParkingError> {
        if capacity == 0 || !self.config.allows_capacity(capacity) {
            return Err(ParkingError::InvalidCapacity(capacity.to_string()));
        }

        let lot = ParkingLotState::new(capacity).map_err(|e| {
            warn!("Could not allocate {} slots: {}", capacity, e);
            ParkingError::InvalidCapacity(capacity.to_string())
        })?;

        if let Some(previous) = &self.lot {
            info!(
                "Replacing existing lot of {} slots ({} occupied)",
                previous.capacity(),
                previous.occupied_count()
            );
        }

        self.lot = Some(lot);
        debug!("Created parking lot with {} slots", capacity);
        Ok(capacity)
    }

    pub fn park(&mut self, registration_number: &str) -> Result<Allocation, ParkingError> {
        let lot = self.lot_mut()?;

        if let Some(slot) = lot.slot_of(registration_number) {
            warn!("Rejected duplicate park for {}", registration_number);
            return Err(ParkingError::AlreadyParked {
                registration_number: registration_number.to_string(),
                slot,
            });
        }

        let slot = lot
            .occupy(Vehicle::new(registration_number))
            .ok_or(ParkingError::LotFull)?;

        debug!("Parked {} at slot {}", registration_number, slot);
        Ok(Allocation {
            registration_number: registration_number.to_string(),
            slot,
        })
    }

    pub fn leave(&mut self, registration_number: &str, hours: u32) -> Result<Departure, ParkingError> {
        let rates = self.config.rate_card();
        let lot = self.lot_mut()?;

        let (slot, vehicle) = lot
            .vacate(registration_number)
            .ok_or_else(|| ParkingError::NotFound(registration_number.to_string()))?;

        let charge = rates.charge_for(hours);
        debug!("{} left slot {} after {} hours, charged {}", vehicle, slot, hours, charge);

        Ok(Departure {
            registration_number: vehicle.registration_number().to_string(),
            slot,
            hours,
            charge,
        })
    }

    pub fn status(&self) -> Result<String, ParkingError> {
        let lot = self.lot.as_ref().ok_or(ParkingError::LotNotCreated)?;
        Ok(reporting::status_report(lot))
    }
}
