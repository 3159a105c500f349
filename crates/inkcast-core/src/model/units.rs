//! Unit system used for display strings and wind thresholds

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Metres per second to miles per hour
const MPS_TO_MPH: f32 = 2.236_936;

/// Round a temperature to whole degrees for display.
///
/// Values in (-0.5, 0) come out as 0, never "-0".
pub fn whole_degrees(value: f32) -> i32 {
    value.round() as i32
}

/// Measurement system the weather provider reports in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// °F, mph, miles
    #[default]
    Imperial,
    /// °C, m/s, kilometres
    Metric,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }

    /// Temperature unit glyph including the degree sign
    pub fn temperature_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "°F",
            UnitSystem::Metric => "°C",
        }
    }

    pub fn wind_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "mph",
            UnitSystem::Metric => "m/s",
        }
    }

    pub fn distance_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "mi",
            UnitSystem::Metric => "km",
        }
    }

    /// Convert a wind speed reported in this system to mph.
    ///
    /// Icon wind tiers are defined in mph regardless of the display units.
    pub fn wind_mph(&self, speed: f32) -> f32 {
        match self {
            UnitSystem::Imperial => speed,
            UnitSystem::Metric => speed * MPS_TO_MPH,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "imperial" => Ok(UnitSystem::Imperial),
            "metric" => Ok(UnitSystem::Metric),
            other => Err(ConfigError::Invalid {
                key: "units",
                reason: format!("unknown unit system '{other}' (expected imperial or metric)"),
            }),
        }
    }
}
