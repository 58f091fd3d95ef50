//! Collision-avoidance decision unit
//!
//! `CollisionGuard` tracks own-vehicle speed and the active posted speed
//! limit, and publishes a brake command whenever an overspeed or an
//! imminent-collision condition holds.

use crate::bus::{BusSubscriber, CommandSink};
use crate::events::{BrakeCommand, CarDetected, SpeedLimitDetected, SpeedUpdate};

/// Collision sensitivity applied until the threshold is reconfigured (s)
pub const DEFAULT_COLLISION_THRESHOLD_S: f64 = 5.0;
/// Lowest accepted collision threshold (s)
pub const MIN_COLLISION_THRESHOLD_S: f64 = 1.0;
/// Speed limit assumed before the first roadside detection (m/s)
pub const DEFAULT_SPEED_LIMIT_MPS: u16 = 39;

/// Errors from reconfiguring the guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Requested collision threshold is below the accepted minimum
    ThresholdTooLow,
}

/// Reactive collision-avoidance decision unit
///
/// The guard is three independent update rules sharing one state: each
/// inbound event updates the state and publishes at most one brake command.
/// Handlers never fail; degenerate numeric inputs propagate through IEEE 754
/// arithmetic and fall out of the braking conditions.
#[derive(Debug, Clone)]
pub struct CollisionGuard {
    /// Largest time to collision that still triggers braking (s)
    collision_threshold_s: f64,
    /// Last reported own-vehicle speed, signed (m/s)
    speed_mps: f64,
    /// Currently active posted speed limit (m/s)
    speed_limit_mps: u16,
}

impl Default for CollisionGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl CollisionGuard {
    /// Create a guard with the default threshold and speed limit
    pub fn new() -> Self {
        Self {
            collision_threshold_s: DEFAULT_COLLISION_THRESHOLD_S,
            speed_mps: 0.0,
            speed_limit_mps: DEFAULT_SPEED_LIMIT_MPS,
        }
    }

    /// Replace the collision threshold
    ///
    /// Rejects values below [`MIN_COLLISION_THRESHOLD_S`]; on rejection the
    /// previous threshold stays in effect.
    pub fn set_collision_threshold(&mut self, seconds: f64) -> Result<(), ConfigError> {
        if seconds < MIN_COLLISION_THRESHOLD_S {
            return Err(ConfigError::ThresholdTooLow);
        }
        self.collision_threshold_s = seconds;
        Ok(())
    }

    /// Get the active collision threshold (s)
    pub fn collision_threshold_s(&self) -> f64 {
        self.collision_threshold_s
    }

    /// Get the last stored own-vehicle speed (m/s)
    pub fn speed_mps(&self) -> f64 {
        self.speed_mps
    }

    /// Get the active posted speed limit (m/s)
    pub fn speed_limit_mps(&self) -> u16 {
        self.speed_limit_mps
    }
}

impl BusSubscriber for CollisionGuard {
    fn on_speed_update<B: CommandSink>(&mut self, update: SpeedUpdate, bus: &mut B) {
        if update.velocity_mps > f64::from(self.speed_limit_mps) {
            bus.publish(BrakeCommand::immediate());
        }
        // The raw sample is stored even above the limit; the limit gates the
        // alert, it does not clamp the stored speed.
        self.speed_mps = update.velocity_mps;
    }

    fn on_car_detected<B: CommandSink>(&mut self, detection: CarDetected, bus: &mut B) {
        let relative_speed_mps = self.speed_mps - detection.velocity_mps;
        // Raw IEEE 754 division: zero relative speed yields an infinity or
        // NaN, both of which fail the gate below.
        let time_to_collision_s = detection.distance_m / relative_speed_mps;
        if time_to_collision_s > 0.0 && time_to_collision_s <= self.collision_threshold_s {
            bus.publish(BrakeCommand::new(time_to_collision_s));
        }
    }

    fn on_speed_limit<B: CommandSink>(&mut self, detected: SpeedLimitDetected, bus: &mut B) {
        self.speed_limit_mps = detected.limit_mps;
        if self.speed_mps > f64::from(self.speed_limit_mps) {
            bus.publish(BrakeCommand::immediate());
        }
    }
}
