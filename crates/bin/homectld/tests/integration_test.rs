//! End-to-end tests for a fully wired controller.
//!
//! Each test assembles a real controller with real devices and drives it
//! through the public query/control API only, the way an external consumer
//! would.

use homectl_app::HomeController;
use homectl_domain::command::CommandParams;
use homectl_domain::device::{Device, DeviceKind, DoorLock, Light, SecurityCamera, Thermostat};
use homectl_domain::status::{KindStatus, SystemStatus};

fn device(id: &str, name: &str, location: &str, kind: DeviceKind) -> Device {
    Device::builder()
        .id(id)
        .name(name)
        .location(location)
        .kind(kind)
        .build()
        .expect("demo devices should validate")
}

/// A light and a thermostat sharing one room.
fn room_setup() -> HomeController {
    let mut home = HomeController::new("Test Home");
    assert!(home.add_device(device(
        "L1",
        "Room Light",
        "Room",
        DeviceKind::Light(Light::default()),
    )));
    assert!(home.add_device(device(
        "T1",
        "Room Thermostat",
        "Room",
        DeviceKind::Thermostat(Thermostat::default()),
    )));
    home
}

#[test]
fn should_control_light_and_query_by_location() {
    let mut home = room_setup();

    let params = CommandParams::new().with("brightness", 70).with("color", "warm");
    assert!(home.control_device("L1", "turn_on", &params));

    match &home.get_device("L1").unwrap().kind {
        DeviceKind::Light(light) => {
            assert!(light.is_on);
            assert_eq!(light.brightness, 70);
            assert_eq!(light.color, "warm");
        }
        other => panic!("expected a light, got {other:?}"),
    }

    assert_eq!(home.devices_by_location("Room").len(), 2);
    assert_eq!(home.system_status().total_devices, 2);
}

#[test]
fn should_count_every_device_as_online() {
    let home = room_setup();
    let status = home.system_status();
    assert_eq!(status.online_devices, status.total_devices);
}

#[test]
fn should_export_parseable_config_after_commands() {
    let mut home = room_setup();
    assert!(home.add_device(device(
        "C1",
        "Hall Camera",
        "Hall",
        DeviceKind::SecurityCamera(SecurityCamera::default()),
    )));
    assert!(home.add_device(device(
        "D1",
        "Hall Lock",
        "Hall",
        DeviceKind::DoorLock(DoorLock::default()),
    )));

    assert!(home.control_device("C1", "start_recording", &CommandParams::new()));
    assert!(home.control_device("D1", "unlock", &CommandParams::new()));

    let exported = home.export_config().unwrap();
    let parsed: SystemStatus = serde_json::from_str(&exported).unwrap();
    assert_eq!(parsed.total_devices, 4);
    assert_eq!(parsed.devices.len(), 4);

    let lock = parsed
        .devices
        .iter()
        .find(|d| d.device_id.as_str() == "D1")
        .unwrap();
    match &lock.kind {
        KindStatus::DoorLock { is_locked, last_access } => {
            assert!(!is_locked);
            assert!(last_access.is_some());
        }
        other => panic!("expected a lock status, got {other:?}"),
    }
}

#[test]
fn should_export_raw_json_with_expected_shape() {
    let home = room_setup();
    let exported = home.export_config().unwrap();
    let value: serde_json::Value = serde_json::from_str(&exported).unwrap();

    assert_eq!(value["name"], "Test Home");
    assert_eq!(value["total_devices"], 2);
    assert_eq!(value["online_devices"], 2);
    let devices = value["devices"].as_array().unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0]["device_id"], "L1");
    assert_eq!(devices[0]["type"], "Light");
    assert_eq!(devices[1]["type"], "Thermostat");
    assert!(devices[0]["last_updated"].as_str().unwrap().contains('T'));
}

#[test]
fn should_survive_commands_to_removed_devices() {
    let mut home = room_setup();
    assert!(home.remove_device("L1"));
    assert!(!home.control_device("L1", "turn_on", &CommandParams::new()));
    assert!(!home.remove_device("L1"));
    assert_eq!(home.system_status().total_devices, 1);
}

#[test]
fn should_keep_registry_intact_when_adding_duplicate_id() {
    let mut home = room_setup();
    assert!(!home.add_device(device(
        "L1",
        "Impostor Light",
        "Garage",
        DeviceKind::Light(Light::default()),
    )));
    assert_eq!(home.len(), 2);
    assert_eq!(home.get_device("L1").unwrap().name, "Room Light");
}
