//! Vehicle telemetry events and the brake actuation command

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Own-vehicle speed sample from the drivetrain
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeedUpdate {
    /// Measured speed, signed (m/s)
    pub velocity_mps: f64,
}

/// Forward-object sample from the ranging sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CarDetected {
    /// Distance to the object (m)
    pub distance_m: f64,
    /// Object velocity along our direction of travel (m/s)
    pub velocity_mps: f64,
}

/// Posted speed limit observed by the roadside sign recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeedLimitDetected {
    /// Posted limit (m/s)
    pub limit_mps: u16,
}

/// Brake actuation command
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrakeCommand {
    /// Time to collision (s); 0 means brake immediately, no computed horizon
    pub time_to_collision_s: f64,
}

impl BrakeCommand {
    /// Command braking against a computed collision horizon
    pub const fn new(time_to_collision_s: f64) -> Self {
        Self { time_to_collision_s }
    }

    /// Command immediate braking with no computed horizon
    pub const fn immediate() -> Self {
        Self {
            time_to_collision_s: 0.0,
        }
    }

    /// Returns true if this command carries no collision horizon
    pub fn is_immediate(&self) -> bool {
        self.time_to_collision_s == 0.0
    }
}

/// Inbound events a transport can deliver to a subscriber
///
/// Carrying the three telemetry kinds in one enum lets a transport hold a
/// single queue or dispatch path and route by variant on delivery.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VehicleEvent {
    /// Own-vehicle speed sample
    SpeedUpdate(SpeedUpdate),
    /// Forward object detected
    CarDetected(CarDetected),
    /// Posted speed limit observed
    SpeedLimitDetected(SpeedLimitDetected),
}

impl From<SpeedUpdate> for VehicleEvent {
    fn from(update: SpeedUpdate) -> Self {
        VehicleEvent::SpeedUpdate(update)
    }
}

impl From<CarDetected> for VehicleEvent {
    fn from(detection: CarDetected) -> Self {
        VehicleEvent::CarDetected(detection)
    }
}

impl From<SpeedLimitDetected> for VehicleEvent {
    fn from(detected: SpeedLimitDetected) -> Self {
        VehicleEvent::SpeedLimitDetected(detected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_command() {
        let command = BrakeCommand::immediate();
        assert_eq!(command.time_to_collision_s, 0.0);
        assert!(command.is_immediate());
    }

    #[test]
    fn test_horizon_command_is_not_immediate() {
        assert!(!BrakeCommand::new(1.5).is_immediate());
    }

    #[test]
    fn test_event_conversions() {
        let update = SpeedUpdate { velocity_mps: 12.0 };
        assert_eq!(VehicleEvent::from(update), VehicleEvent::SpeedUpdate(update));

        let detection = CarDetected {
            distance_m: 30.0,
            velocity_mps: 4.0,
        };
        assert_eq!(
            VehicleEvent::from(detection),
            VehicleEvent::CarDetected(detection)
        );

        let detected = SpeedLimitDetected { limit_mps: 25 };
        assert_eq!(
            VehicleEvent::from(detected),
            VehicleEvent::SpeedLimitDetected(detected)
        );
    }
}
