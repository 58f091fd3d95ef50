//! AutoBrake collision-avoidance decision logic
//!
//! This crate implements the decision unit that turns vehicle telemetry into
//! brake commands. The unit subscribes to three event kinds and publishes one:
//!
//! ```text
//! SpeedUpdate ────────┐
//! CarDetected ────────┼──> CollisionGuard ──> BrakeCommand
//! SpeedLimitDetected ─┘
//! ```
//!
//! Braking is commanded on an overspeed condition (own speed above the active
//! posted limit) and on an imminent-collision condition (time to collision at
//! or below the configured threshold).
//!
//! The crate is transport-agnostic: the unit sees its bus only through the
//! [`CommandSink`] and [`BusSubscriber`] traits, so the same logic runs
//! against a real vehicle bus or the in-process one used in tests.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod events;
pub mod guard;

pub use bus::{BusSubscriber, CommandSink};
pub use events::{BrakeCommand, CarDetected, SpeedLimitDetected, SpeedUpdate, VehicleEvent};
pub use guard::{
    CollisionGuard, ConfigError, DEFAULT_COLLISION_THRESHOLD_S, DEFAULT_SPEED_LIMIT_MPS,
    MIN_COLLISION_THRESHOLD_S,
};
