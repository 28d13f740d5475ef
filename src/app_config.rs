use serde::Deserialize;
use config::{Config, ConfigError, File};
use std::convert::TryFrom;

use crate::core::models::RateCard;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub base_charge: u64,
    pub base_hours: u32,
    pub hourly_charge: u64,
    /// Upper bound for `create_parking_lot`; unbounded when unset.
    #[serde(default)]
    pub max_capacity: Option<usize>,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Start off with default values
            .set_default("base_charge", 10)?
            .set_default("base_hours", 2)?
            .set_default("hourly_charge", 10)?
            // Optional local overrides, e.g. parking.toml
            .add_source(File::with_name("parking").required(false))
            // Settings from environment variables (with a prefix of PARKING)
            .add_source(config::Environment::with_prefix("PARKING"))
            .build()?;

        Self::try_from(settings)
    }

    pub fn rate_card(&self) -> RateCard {
        RateCard::new(self.base_charge, self.base_hours, self.hourly_charge)
    }

    pub fn allows_capacity(&self, capacity: usize) -> bool {
        self.max_capacity.map_or(true, |max| capacity <= max)
    }
}

impl TryFrom<Config> for AppConfig {
    type Error = ConfigError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_charge: 10,
            base_hours: 2,
            hourly_charge: 10,
            max_capacity: None,
        }
    }
}
