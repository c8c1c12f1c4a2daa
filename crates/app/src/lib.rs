//! # homectl-app
//!
//! Application layer — the controller (device registry) and its use-cases.
//!
//! ## Responsibilities
//! - Own the device map and enforce identifier uniqueness
//! - Forward commands to devices and surface their boolean outcome
//! - Answer queries: by id, by location, by kind, whole-system snapshots
//! - Serialize the system snapshot for export
//!
//! ## Dependency rule
//! Depends on `homectl-domain` only. The controller is constructed
//! explicitly and handed to callers; there is no global registry.

pub mod controller;

pub use controller::HomeController;
