//! Canned control scenarios — peripheral glue over the controller's public
//! query/control API.

use homectl_app::HomeController;
use homectl_domain::command::CommandParams;
use homectl_domain::id::DeviceId;

fn ids_of_type(home: &HomeController, kind_tag: &str) -> Vec<DeviceId> {
    home.devices_by_type(kind_tag)
        .into_iter()
        .map(|device| device.id.clone())
        .collect()
}

/// Arriving home: unlock the front door, light and heat the living room,
/// stop camera recording.
pub fn arrive_home(home: &mut HomeController) {
    tracing::info!("running scenario: arrive home");

    home.control_device("lock_front", "unlock", &CommandParams::new());
    home.control_device(
        "light_lr_001",
        "turn_on",
        &CommandParams::new().with("brightness", 70).with("color", "warm white"),
    );
    home.control_device(
        "thermo_lr_001",
        "set_mode",
        &CommandParams::new().with("mode", "auto"),
    );
    home.control_device(
        "thermo_lr_001",
        "set_temperature",
        &CommandParams::new().with("temp", 23),
    );

    for id in ids_of_type(home, "SecurityCamera") {
        home.control_device(id.as_str(), "stop_recording", &CommandParams::new());
    }
}

/// Movie time: dim the living room and settle the temperature.
pub fn movie_time(home: &mut HomeController) {
    tracing::info!("running scenario: movie time");

    home.control_device(
        "light_lr_001",
        "turn_on",
        &CommandParams::new().with("brightness", 30).with("color", "blue"),
    );
    home.control_device("light_lr_002", "turn_off", &CommandParams::new());
    home.control_device(
        "thermo_lr_001",
        "set_temperature",
        &CommandParams::new().with("temp", 22),
    );
}

/// Night mode: dim the bedroom, darken the rest, lock up, arm the cameras.
pub fn night_mode(home: &mut HomeController) {
    tracing::info!("running scenario: night mode");

    home.control_device(
        "light_br_001",
        "turn_on",
        &CommandParams::new().with("brightness", 20).with("color", "warm"),
    );
    home.control_device("light_lr_001", "turn_off", &CommandParams::new());
    home.control_device("light_lr_002", "turn_off", &CommandParams::new());
    home.control_device("light_kitchen", "turn_off", &CommandParams::new());

    for id in ids_of_type(home, "DoorLock") {
        home.control_device(id.as_str(), "lock", &CommandParams::new());
    }

    home.control_device(
        "thermo_br_001",
        "set_temperature",
        &CommandParams::new().with("temp", 20),
    );

    for id in ids_of_type(home, "SecurityCamera") {
        home.control_device(id.as_str(), "start_recording", &CommandParams::new());
    }
}

/// Leaving home: everything off, eco temperatures, doors locked, cameras
/// recording.
pub fn leave_home(home: &mut HomeController) {
    tracing::info!("running scenario: leave home");

    for id in ids_of_type(home, "Light") {
        home.control_device(id.as_str(), "turn_off", &CommandParams::new());
    }

    for id in ids_of_type(home, "Thermostat") {
        home.control_device(
            id.as_str(),
            "set_mode",
            &CommandParams::new().with("mode", "cool"),
        );
        home.control_device(
            id.as_str(),
            "set_temperature",
            &CommandParams::new().with("temp", 28),
        );
    }

    for id in ids_of_type(home, "DoorLock") {
        home.control_device(id.as_str(), "lock", &CommandParams::new());
    }

    for id in ids_of_type(home, "SecurityCamera") {
        home.control_device(id.as_str(), "start_recording", &CommandParams::new());
    }
}
