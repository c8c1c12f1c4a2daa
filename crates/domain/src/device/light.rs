//! Smart light — responds to `turn_on`, `turn_off`, `set_brightness`,
//! `set_color`.

use crate::command::CommandParams;
use crate::status::KindStatus;

/// A dimmable colored light.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub is_on: bool,
    /// Brightness percentage, clamped to `0..=100`.
    pub brightness: i64,
    pub color: String,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            is_on: false,
            brightness: 0,
            color: "white".to_string(),
        }
    }
}

impl Light {
    /// Apply a named command, mutating state on success only.
    ///
    /// `turn_on` accepts optional `brightness` (clamped) and `color` keys.
    /// `set_brightness` requires the light to be on and a `level` key.
    pub fn handle_command(&mut self, command: &str, params: &CommandParams) -> bool {
        match command {
            "turn_on" => {
                self.is_on = true;
                if let Some(level) = params.get_i64("brightness") {
                    self.brightness = level.clamp(0, 100);
                }
                if let Some(color) = params.get_str("color") {
                    self.color = color.to_string();
                }
                true
            }
            "turn_off" => {
                self.is_on = false;
                self.brightness = 0;
                true
            }
            "set_brightness" => match params.get_i64("level") {
                Some(level) if self.is_on => {
                    self.brightness = level.clamp(0, 100);
                    true
                }
                _ => false,
            },
            "set_color" => {
                if let Some(color) = params.get_str("color") {
                    self.color = color.to_string();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Kind-specific part of the status record.
    #[must_use]
    pub fn snapshot(&self) -> KindStatus {
        KindStatus::Light {
            is_on: self.is_on,
            brightness: self.brightness,
            color: self.color.clone(),
        }
    }
}
