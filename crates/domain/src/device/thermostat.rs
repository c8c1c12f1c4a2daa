//! Smart thermostat — responds to `set_temperature`, `set_mode`, `turn_on`,
//! `turn_off`.

use serde::{Deserialize, Serialize};

use crate::command::CommandParams;
use crate::status::KindStatus;

/// Operating mode of a [`Thermostat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThermostatMode {
    #[default]
    Auto,
    Heat,
    Cool,
    Off,
}

impl ThermostatMode {
    /// Parse a mode from its lowercase wire name. Unknown names yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(Self::Auto),
            "heat" => Some(Self::Heat),
            "cool" => Some(Self::Cool),
            "off" => Some(Self::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThermostatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Heat => f.write_str("heat"),
            Self::Cool => f.write_str("cool"),
            Self::Off => f.write_str("off"),
        }
    }
}

/// A heating/cooling controller with a target temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct Thermostat {
    /// Measured temperature in Celsius.
    pub current_temp: f64,
    /// Requested temperature in Celsius. Not clamped.
    pub target_temp: f64,
    pub mode: ThermostatMode,
    pub is_on: bool,
}

impl Default for Thermostat {
    fn default() -> Self {
        Self {
            current_temp: 25.0,
            target_temp: 22.0,
            mode: ThermostatMode::Auto,
            is_on: true,
        }
    }
}

impl Thermostat {
    /// Apply a named command, mutating state on success only.
    ///
    /// `set_mode` couples the power flag to the mode: any mode other than
    /// `off` switches the unit on, `off` switches it off.
    pub fn handle_command(&mut self, command: &str, params: &CommandParams) -> bool {
        match command {
            "set_temperature" => {
                if let Some(temp) = params.get_f64("temp") {
                    self.target_temp = temp;
                    true
                } else {
                    false
                }
            }
            "set_mode" => {
                let Some(mode) = params.get_str("mode").and_then(ThermostatMode::parse) else {
                    return false;
                };
                self.mode = mode;
                self.is_on = mode != ThermostatMode::Off;
                true
            }
            "turn_on" => {
                self.is_on = true;
                true
            }
            "turn_off" => {
                self.is_on = false;
                self.mode = ThermostatMode::Off;
                true
            }
            _ => false,
        }
    }

    /// Kind-specific part of the status record.
    #[must_use]
    pub fn snapshot(&self) -> KindStatus {
        KindStatus::Thermostat {
            current_temp: self.current_temp,
            target_temp: self.target_temp,
            mode: self.mode,
            is_on: self.is_on,
        }
    }
}
