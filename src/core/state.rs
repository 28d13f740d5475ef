// src/core/state.rs

use std::collections::{HashMap, TryReserveError};

use crate::core::models::Vehicle;

/// Fixed-capacity slot table plus a reverse index from registration number to slot.
///
/// Slots are 0-indexed internally; every slot number crossing this API is 1-based.
#[derive(Clone, Debug)]
pub struct ParkingLotState {
    slots: Vec<Option<Vehicle>>,
    slot_by_registration: HashMap<String, usize>,
}

impl ParkingLotState {
    /// Fails instead of aborting when `capacity` slots cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize(capacity, None);

        Ok(Self {
            slots,
            slot_by_registration: HashMap::new(),
        })
    }

    // Getter methods
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.slot_by_registration.len()
    }

    pub fn available_count(&self) -> usize {
        self.capacity() - self.occupied_count()
    }

    pub fn is_full(&self) -> bool {
        self.available_count() == 0
    }

    pub fn slot_of(&self, registration_number: &str) -> Option<usize> {
        self.slot_by_registration
            .get(registration_number)
            .map(|index| index + 1)
    }

    pub fn vehicle_at(&self, slot: usize) -> Option<&Vehicle> {
        slot.checked_sub(1)
            .and_then(|index| self.slots.get(index))
            .and_then(Option::as_ref)
    }

    /// Occupied slots in ascending slot order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Vehicle)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|vehicle| (index + 1, vehicle)))
    }

    /// Lowest-numbered empty slot, if any.
    pub fn nearest_free_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none).map(|index| index + 1)
    }

    // Setter methods

    /// Places the vehicle in the nearest free slot. Returns `None` when the lot is full.
    /// The caller is responsible for rejecting registrations that are already parked.
    pub fn occupy(&mut self, vehicle: Vehicle) -> Option<usize> {
        let slot = self.nearest_free_slot()?;
        let index = slot - 1;
        self.slot_by_registration
            .insert(vehicle.registration_number().to_string(), index);
        self.slots[index] = Some(vehicle);
        Some(slot)
    }

    /// Frees the slot held by `registration_number`, returning the slot and its vehicle.
    pub fn vacate(&mut self, registration_number: &str) -> Option<(usize, Vehicle)> {
        let index = self.slot_by_registration.remove(registration_number)?;
        let vehicle = self.slots[index].take()?;
        Some((index + 1, vehicle))
    }
}
