//! # homectld — homectl demo daemon
//!
//! Composition root: loads configuration, wires up the controller, registers
//! a demo device fleet, runs the canned scenarios, and prints the final
//! system status.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod scenarios;

use homectl_app::HomeController;
use homectl_domain::device::{
    Device, DeviceKind, DoorLock, Light, SecurityCamera, Thermostat,
};
use homectl_domain::error::HomeCtlError;

use crate::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(config.logging.filter.as_str())
        .init();

    let mut home = HomeController::new(&config.home.name);
    register_fleet(&mut home)?;
    tracing::info!(devices = home.len(), "smart home set up");

    scenarios::arrive_home(&mut home);
    scenarios::movie_time(&mut home);
    scenarios::night_mode(&mut home);
    scenarios::leave_home(&mut home);

    let status = home.system_status();
    tracing::info!(
        total = status.total_devices,
        online = status.online_devices,
        "final system status"
    );

    println!("{}", home.export_config()?);
    Ok(())
}

/// Register the demo fleet: lights, thermostats, cameras, and locks spread
/// over the house.
fn register_fleet(home: &mut HomeController) -> Result<(), HomeCtlError> {
    let devices = [
        // Living room
        ("light_lr_001", "Living Room Main Light", "Living Room", DeviceKind::Light(Light::default())),
        ("light_lr_002", "Living Room Accent Light", "Living Room", DeviceKind::Light(Light::default())),
        ("thermo_lr_001", "Living Room Thermostat", "Living Room", DeviceKind::Thermostat(Thermostat::default())),
        // Bedroom
        ("light_br_001", "Bedroom Light", "Bedroom", DeviceKind::Light(Light::default())),
        ("thermo_br_001", "Bedroom Thermostat", "Bedroom", DeviceKind::Thermostat(Thermostat::default())),
        // Security
        ("cam_front", "Front Door Camera", "Front Door", DeviceKind::SecurityCamera(SecurityCamera::default())),
        ("cam_back", "Back Door Camera", "Back Door", DeviceKind::SecurityCamera(SecurityCamera::default())),
        ("lock_front", "Front Door Lock", "Front Door", DeviceKind::DoorLock(DoorLock::default())),
        ("lock_back", "Back Door Lock", "Back Door", DeviceKind::DoorLock(DoorLock::default())),
        // Kitchen
        ("light_kitchen", "Kitchen Light", "Kitchen", DeviceKind::Light(Light::default())),
    ];

    for (id, name, location, kind) in devices {
        let device = Device::builder()
            .id(id)
            .name(name)
            .location(location)
            .kind(kind)
            .build()?;
        if !home.add_device(device) {
            tracing::warn!(id, "demo fleet contains a duplicate id, skipping");
        }
    }
    Ok(())
}
