//! Home controller — the owning registry of all devices.
//!
//! The controller holds the only mapping of device id → device. Runtime
//! operations follow the boolean-outcome contract: duplicates, unknown ids,
//! and rejected commands all answer `false` (or `None` for lookups), never
//! an error. Listing order is the map's ordering over device ids, which
//! keeps snapshots deterministic.

use std::collections::BTreeMap;

use homectl_domain::command::CommandParams;
use homectl_domain::device::Device;
use homectl_domain::error::HomeCtlError;
use homectl_domain::id::DeviceId;
use homectl_domain::status::{DeviceStatus, SystemStatus};

/// The device registry: owns every device and dispatches commands.
#[derive(Debug)]
pub struct HomeController {
    name: String,
    devices: BTreeMap<DeviceId, Device>,
}

impl Default for HomeController {
    fn default() -> Self {
        Self::new("My Smart Home")
    }
}

impl HomeController {
    /// Create an empty controller with the given display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            devices: BTreeMap::new(),
        }
    }

    /// The controller's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of registered devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Whether no devices are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Register a device, taking ownership of it.
    ///
    /// Returns `false` and leaves the registry untouched when a device with
    /// the same id is already present.
    #[tracing::instrument(skip(self, device), fields(device_id = %device.id))]
    pub fn add_device(&mut self, device: Device) -> bool {
        if self.devices.contains_key(&device.id) {
            tracing::warn!("device id already registered");
            return false;
        }
        tracing::debug!(kind = device.kind_tag(), "device registered");
        self.devices.insert(device.id.clone(), device);
        true
    }

    /// Remove a device by id. Returns `false` when the id is unknown.
    #[tracing::instrument(skip(self))]
    pub fn remove_device(&mut self, id: &str) -> bool {
        let removed = self.devices.remove(id).is_some();
        if removed {
            tracing::debug!("device removed");
        } else {
            tracing::warn!("remove requested for unknown device");
        }
        removed
    }

    /// Look up a device by exact id.
    #[must_use]
    pub fn get_device(&self, id: &str) -> Option<&Device> {
        self.devices.get(id)
    }

    /// Forward a command to the addressed device.
    ///
    /// Returns `false` when the id is unknown; otherwise the device's own
    /// boolean outcome.
    #[tracing::instrument(skip(self, params))]
    pub fn control_device(&mut self, id: &str, command: &str, params: &CommandParams) -> bool {
        let Some(device) = self.devices.get_mut(id) else {
            tracing::warn!("control requested for unknown device");
            return false;
        };
        let accepted = device.execute_command(command, params);
        tracing::debug!(accepted, "command dispatched");
        accepted
    }

    /// Status snapshot of every device, in id order.
    #[must_use]
    pub fn list_devices(&self) -> Vec<DeviceStatus> {
        self.devices.values().map(Device::status).collect()
    }

    /// All devices whose location matches `location` exactly.
    #[must_use]
    pub fn devices_by_location(&self, location: &str) -> Vec<&Device> {
        self.devices
            .values()
            .filter(|device| device.location == location)
            .collect()
    }

    /// All devices of the given kind tag ("Light", "Thermostat", ...).
    ///
    /// The comparison is on the device's declared kind, so an unknown tag
    /// simply yields an empty list.
    #[must_use]
    pub fn devices_by_type(&self, kind_tag: &str) -> Vec<&Device> {
        self.devices
            .values()
            .filter(|device| device.kind_tag() == kind_tag)
            .collect()
    }

    /// Whole-system snapshot: counts plus every device's status.
    #[must_use]
    pub fn system_status(&self) -> SystemStatus {
        SystemStatus {
            name: self.name.clone(),
            total_devices: self.devices.len(),
            online_devices: self.devices.values().filter(|d| d.is_online).count(),
            devices: self.list_devices(),
        }
    }

    /// Serialize the system snapshot as pretty-printed JSON with stable
    /// field ordering.
    ///
    /// # Errors
    ///
    /// Returns [`HomeCtlError::Serialize`] if JSON encoding fails.
    pub fn export_config(&self) -> Result<String, HomeCtlError> {
        Ok(serde_json::to_string_pretty(&self.system_status())?)
    }
}
