//! Door lock — responds to `lock` and `unlock`.

use crate::command::CommandParams;
use crate::status::KindStatus;
use crate::time::{Timestamp, now};

/// A door lock that records when it was last operated.
#[derive(Debug, Clone, PartialEq)]
pub struct DoorLock {
    pub is_locked: bool,
    /// Stamped on every successful `lock`/`unlock`; `None` until then.
    pub last_access: Option<Timestamp>,
}

impl Default for DoorLock {
    fn default() -> Self {
        Self {
            is_locked: true,
            last_access: None,
        }
    }
}

impl DoorLock {
    /// Apply a named command, mutating state on success only.
    pub fn handle_command(&mut self, command: &str, _params: &CommandParams) -> bool {
        match command {
            "lock" => {
                self.is_locked = true;
                self.last_access = Some(now());
                true
            }
            "unlock" => {
                self.is_locked = false;
                self.last_access = Some(now());
                true
            }
            _ => false,
        }
    }

    /// Kind-specific part of the status record.
    #[must_use]
    pub fn snapshot(&self) -> KindStatus {
        KindStatus::DoorLock {
            is_locked: self.is_locked,
            last_access: self.last_access,
        }
    }
}
