//! Security camera — responds to `start_recording`, `stop_recording`,
//! `set_resolution`.

use crate::command::CommandParams;
use crate::status::KindStatus;

/// A motion-aware recording camera.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityCamera {
    pub is_recording: bool,
    /// Set by an external motion source; no command toggles it.
    pub motion_detected: bool,
    pub resolution: String,
}

impl Default for SecurityCamera {
    fn default() -> Self {
        Self {
            is_recording: false,
            motion_detected: false,
            resolution: "1080p".to_string(),
        }
    }
}

impl SecurityCamera {
    /// Apply a named command, mutating state on success only.
    pub fn handle_command(&mut self, command: &str, params: &CommandParams) -> bool {
        match command {
            "start_recording" => {
                self.is_recording = true;
                true
            }
            "stop_recording" => {
                self.is_recording = false;
                true
            }
            "set_resolution" => {
                if let Some(resolution) = params.get_str("resolution") {
                    self.resolution = resolution.to_string();
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
        KindStatus::SecurityCamera {
            is_recording: self.is_recording,
            motion_detected: self.motion_detected,
            resolution: self.resolution.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_idle_1080p() {
        let camera = SecurityCamera::default();
        assert!(!camera.is_recording);
        assert!(!camera.motion_detected);
        assert_eq!(camera.resolution, "1080p");
    }

    #[test]
    fn should_start_and_stop_recording() {
        let mut camera = SecurityCamera::default();
        assert!(camera.handle_command("start_recording", &CommandParams::new()));
        assert!(camera.is_recording);
        assert!(camera.handle_command("stop_recording", &CommandParams::new()));
        assert!(!camera.is_recording);
    }

    #[test]
    fn should_start_recording_even_when_already_recording() {
        let mut camera = SecurityCamera::default();
        camera.handle_command("start_recording", &CommandParams::new());
        assert!(camera.handle_command("start_recording", &CommandParams::new()));
        assert!(camera.is_recording);
    }

    #[test]
    fn should_set_resolution() {
        let mut camera = SecurityCamera::default();
        let params = CommandParams::new().with("resolution", "4k");
        assert!(camera.handle_command("set_resolution", &params));
        assert_eq!(camera.resolution, "4k");
    }

    #[test]
    fn should_reject_set_resolution_without_resolution() {
        let mut camera = SecurityCamera::default();
        assert!(!camera.handle_command("set_resolution", &CommandParams::new()));
        assert_eq!(camera.resolution, "1080p");
    }

    #[test]
    fn should_reject_unknown_command() {
        let mut camera = SecurityCamera::default();
        assert!(!camera.handle_command("zoom", &CommandParams::new()));
    }
}
