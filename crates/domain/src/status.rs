//! Status records — serializable snapshots of device and system state.
//!
//! Field order is part of the export contract: identity fields first, then
//! the `type` tag, then kind-specific fields. Timestamps serialize as
//! ISO-8601.

use serde::{Deserialize, Serialize};

use crate::device::thermostat::ThermostatMode;
use crate::id::DeviceId;
use crate::time::Timestamp;

/// The kind-specific half of a [`DeviceStatus`], tagged with `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum KindStatus {
    Light {
        is_on: bool,
        brightness: i64,
        color: String,
    },
    Thermostat {
        current_temp: f64,
        target_temp: f64,
        mode: ThermostatMode,
        is_on: bool,
    },
    SecurityCamera {
        is_recording: bool,
        motion_detected: bool,
        resolution: String,
    },
    DoorLock {
        is_locked: bool,
        last_access: Option<Timestamp>,
    },
}

/// Snapshot of a single device's identity and state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceStatus {
    pub device_id: DeviceId,
    pub name: String,
    pub location: String,
    pub is_online: bool,
    pub last_updated: Timestamp,
    #[serde(flatten)]
    pub kind: KindStatus,
}

/// Snapshot of the whole controller, produced by `system_status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub name: String,
    pub total_devices: usize,
    pub online_devices: usize,
    pub devices: Vec<DeviceStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    fn light_status() -> DeviceStatus {
        DeviceStatus {
            device_id: DeviceId::new("light_001"),
            name: "Living Room Light".to_string(),
            location: "Living Room".to_string(),
            is_online: true,
            last_updated: now(),
            kind: KindStatus::Light {
                is_on: true,
                brightness: 70,
                color: "warm white".to_string(),
            },
        }
    }

    #[test]
    fn should_flatten_kind_fields_next_to_identity_fields() {
        let json = serde_json::to_value(light_status()).unwrap();
        assert_eq!(json["device_id"], "light_001");
        assert_eq!(json["type"], "Light");
        assert_eq!(json["brightness"], 70);
        assert_eq!(json["is_online"], true);
    }

    #[test]
    fn should_roundtrip_device_status_through_serde_json() {
        let status = light_status();
        let json = serde_json::to_string(&status).unwrap();
        let parsed: DeviceStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, status);
    }

    #[test]
    fn should_serialize_missing_last_access_as_null() {
        let status = KindStatus::DoorLock {
            is_locked: true,
            last_access: None,
        };
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json["type"], "DoorLock");
        assert!(json["last_access"].is_null());
    }

    #[test]
    fn should_serialize_last_updated_as_iso8601() {
        let json = serde_json::to_value(light_status()).unwrap();
        let text = json["last_updated"].as_str().unwrap();
        assert!(text.contains('T'));
        let parsed: Timestamp = text.parse().unwrap();
        assert!(parsed <= now());
    }

    #[test]
    fn should_roundtrip_system_status_through_serde_json() {
        let status = SystemStatus {
            name: "My Smart Home".to_string(),
            total_devices: 1,
            online_devices: 1,
            devices: vec![light_status()],
        };
        let json = serde_json::to_string_pretty(&status).unwrap();
        let parsed: SystemStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_devices, 1);
        assert_eq!(parsed.devices.len(), 1);
    }
}
