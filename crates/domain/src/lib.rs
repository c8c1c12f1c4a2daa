//! # homectl-domain
//!
//! Pure domain model for the homectl home automation controller.
//!
//! ## Responsibilities
//! - Foundational types: device identifiers, error conventions, timestamps
//! - Define **Devices** (lights, thermostats, security cameras, door locks)
//!   as a tagged union of kinds, each carrying its own typed state
//! - Define **Commands** (named operations with typed parameters, yielding a
//!   boolean success signal)
//! - Define **Status records** (serializable snapshots of device and system
//!   state)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or external IO crates.

pub mod command;
pub mod device;
pub mod error;
pub mod id;
pub mod status;
pub mod time;
