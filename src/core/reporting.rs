// src/core/reporting.rs

use itertools::Itertools;

use crate::core::state::ParkingLotState;

pub const STATUS_HEADER: &str = "Slot No. Registration No.";

/// Header line followed by one `slot registration` line per occupied slot.
pub fn status_report(lot: &ParkingLotState) -> String {
    std::iter::once(STATUS_HEADER.to_string())
        .chain(
            lot.occupied()
                .map(|(slot, vehicle)| format!("{} {}", slot, vehicle.registration_number())),
        )
        .join("\n")
}
