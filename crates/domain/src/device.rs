//! Device — a simulated controllable thing with identity, location, and
//! kind-specific state.
//!
//! Devices are a tagged union: common identity fields live on [`Device`],
//! per-kind state and command handling live on the [`DeviceKind`] variants.
//! Commands yield a boolean success signal and never panic; `last_updated`
//! advances on every command attempt, accepted or not.

pub mod camera;
pub mod light;
pub mod lock;
pub mod thermostat;

pub use camera::SecurityCamera;
pub use light::Light;
pub use lock::DoorLock;
pub use thermostat::{Thermostat, ThermostatMode};

use crate::command::CommandParams;
use crate::error::{HomeCtlError, ValidationError};
use crate::id::DeviceId;
use crate::status::{DeviceStatus, KindStatus};
use crate::time::{Timestamp, now};

/// The kind-specific state of a device.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceKind {
    Light(Light),
    Thermostat(Thermostat),
    SecurityCamera(SecurityCamera),
    DoorLock(DoorLock),
}

impl DeviceKind {
    /// The declared kind tag, as it appears in status records.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Light(_) => "Light",
            Self::Thermostat(_) => "Thermostat",
            Self::SecurityCamera(_) => "SecurityCamera",
            Self::DoorLock(_) => "DoorLock",
        }
    }

    fn handle_command(&mut self, command: &str, params: &CommandParams) -> bool {
        match self {
            Self::Light(d) => d.handle_command(command, params),
            Self::Thermostat(d) => d.handle_command(command, params),
            Self::SecurityCamera(d) => d.handle_command(command, params),
            Self::DoorLock(d) => d.handle_command(command, params),
        }
    }

    fn snapshot(&self) -> KindStatus {
        match self {
            Self::Light(d) => d.snapshot(),
            Self::Thermostat(d) => d.snapshot(),
            Self::SecurityCamera(d) => d.snapshot(),
            Self::DoorLock(d) => d.snapshot(),
        }
    }
}

/// A controllable device with caller-assigned identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub location: String,
    /// Always `true`: the simulation has no connectivity checks, the flag
    /// exists so the status projection can count online devices.
    pub is_online: bool,
    pub last_updated: Timestamp,
    pub kind: DeviceKind,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeCtlError::Validation`] when `id` or `name` is empty.
    pub fn validate(&self) -> Result<(), HomeCtlError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyDeviceId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// The declared kind tag ("Light", "Thermostat", ...).
    #[must_use]
    pub fn kind_tag(&self) -> &'static str {
        self.kind.tag()
    }

    /// Apply a named command.
    ///
    /// `last_updated` advances on every invocation; kind-specific state is
    /// mutated only when the command is recognised and its parameters are
    /// valid. Returns `true` on success.
    pub fn execute_command(&mut self, command: &str, params: &CommandParams) -> bool {
        self.last_updated = now();
        self.kind.handle_command(command, params)
    }

    /// Snapshot identity plus kind-specific state. Pure, no side effect.
    #[must_use]
    pub fn status(&self) -> DeviceStatus {
        DeviceStatus {
            device_id: self.id.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
            is_online: self.is_online,
            last_updated: self.last_updated,
            kind: self.kind.snapshot(),
        }
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    location: Option<String>,
    kind: Option<DeviceKind>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<DeviceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: DeviceKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// The device starts online with `last_updated` set to now.
    ///
    /// # Errors
    ///
    /// Returns [`HomeCtlError::Validation`] if `id` or `name` is missing or
    /// empty, or no kind was provided.
    pub fn build(self) -> Result<Device, HomeCtlError> {
        let kind = self.kind.ok_or(ValidationError::MissingKind)?;
        let device = Device {
            id: self.id.unwrap_or_else(|| DeviceId::new("")),
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            is_online: true,
            last_updated: now(),
            kind,
        };
        device.validate()?;
        Ok(device)
    }
}
