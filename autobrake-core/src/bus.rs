//! Bus contract between the decision unit and its transport
//!
//! The unit consumes two capabilities from whatever bus hosts it: a sink
//! accepting outbound brake commands, and a delivery surface invoking one
//! handler per inbound event kind. Both are plain traits with static
//! dispatch, so a CAN bridge, an IPC ring, or a test harness can stand in
//! without touching the decision logic.

use crate::events::{BrakeCommand, CarDetected, SpeedLimitDetected, SpeedUpdate, VehicleEvent};

/// Write side of the bus: accepts brake commands for publication
///
/// Delivery semantics (ordering, fan-out, at-most-once vs at-least-once)
/// belong to the implementation. The unit only requires that `publish` is
/// callable synchronously from within an event handler.
pub trait CommandSink {
    /// Publish a brake command to the bus
    fn publish(&mut self, command: BrakeCommand);
}

/// Delivery side of the bus: one handler per inbound event kind
///
/// The transport invokes handlers on the publisher's calling thread and must
/// serialize delivery to a given subscriber; each handler runs to completion
/// before the delivery call returns.
pub trait BusSubscriber {
    /// Own-vehicle speed sample delivered
    fn on_speed_update<B: CommandSink>(&mut self, update: SpeedUpdate, bus: &mut B);

    /// Forward object detected
    fn on_car_detected<B: CommandSink>(&mut self, detection: CarDetected, bus: &mut B);

    /// Posted speed limit observed
    fn on_speed_limit<B: CommandSink>(&mut self, detected: SpeedLimitDetected, bus: &mut B);

    /// Route an event to the matching handler
    fn handle<B: CommandSink>(&mut self, event: VehicleEvent, bus: &mut B) {
        match event {
            VehicleEvent::SpeedUpdate(update) => self.on_speed_update(update, bus),
            VehicleEvent::CarDetected(detection) => self.on_car_detected(detection, bus),
            VehicleEvent::SpeedLimitDetected(detected) => self.on_speed_limit(detected, bus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that drops every command
    struct NullSink;

    impl CommandSink for NullSink {
        fn publish(&mut self, _command: BrakeCommand) {}
    }

    /// Subscriber that records what each handler received
    #[derive(Default)]
    struct EventLog {
        speed_updates: Vec<SpeedUpdate>,
        detections: Vec<CarDetected>,
        limits: Vec<SpeedLimitDetected>,
    }

    impl BusSubscriber for EventLog {
        fn on_speed_update<B: CommandSink>(&mut self, update: SpeedUpdate, _bus: &mut B) {
            self.speed_updates.push(update);
        }

        fn on_car_detected<B: CommandSink>(&mut self, detection: CarDetected, _bus: &mut B) {
            self.detections.push(detection);
        }

        fn on_speed_limit<B: CommandSink>(&mut self, detected: SpeedLimitDetected, _bus: &mut B) {
            self.limits.push(detected);
        }
    }

    #[test]
    fn test_handle_routes_by_event_kind() {
        let mut log = EventLog::default();
        let mut sink = NullSink;

        log.handle(SpeedUpdate { velocity_mps: 10.0 }.into(), &mut sink);
        log.handle(
            CarDetected {
                distance_m: 50.0,
                velocity_mps: 2.0,
            }
            .into(),
            &mut sink,
        );
        log.handle(SpeedLimitDetected { limit_mps: 30 }.into(), &mut sink);
        log.handle(SpeedUpdate { velocity_mps: 11.0 }.into(), &mut sink);

        assert_eq!(log.speed_updates.len(), 2);
        assert_eq!(log.detections.len(), 1);
        assert_eq!(log.limits.len(), 1);
        assert_eq!(log.speed_updates[1].velocity_mps, 11.0);
        assert_eq!(log.limits[0].limit_mps, 30);
    }
}
