//! Synchronous in-process service bus
//!
//! `ServiceBus` owns the attached decision units and one actuator sink.
//! Delivery is synchronous on the publisher's calling thread: each attached
//! subscriber's handler runs to completion before `publish_event` returns,
//! and commands published from inside a handler reach the actuator before
//! the next subscriber is served.

use autobrake_core::{BrakeCommand, BusSubscriber, CommandSink, VehicleEvent};
use heapless::Vec;

#[cfg(feature = "defmt")]
use defmt::debug;

// Stub macro when defmt is not available
#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

/// Maximum number of subscribers a bus can host
pub const MAX_SUBSCRIBERS: usize = 4;

/// Handle naming an attached subscriber
///
/// Returned by [`ServiceBus::attach`]. Detaching through a stale handle is a
/// no-op; slot indices may be reused by later attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SubscriberId(usize);

/// Synchronous in-process bus connecting telemetry sources, decision units,
/// and one actuator sink
pub struct ServiceBus<S, A> {
    /// Attached subscribers; `None` marks a freed slot
    slots: Vec<Option<S>, MAX_SUBSCRIBERS>,
    /// Destination for every published brake command
    actuator: A,
}

impl<S, A> ServiceBus<S, A> {
    /// Create a bus delivering commands to the given actuator
    pub fn new(actuator: A) -> Self {
        Self {
            slots: Vec::new(),
            actuator,
        }
    }

    /// Attach a subscriber, reusing a freed slot when one exists
    ///
    /// Returns the subscriber back when every slot is taken.
    pub fn attach(&mut self, subscriber: S) -> Result<SubscriberId, S> {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = Some(subscriber);
                debug!("bus: subscriber attached in slot {}", index);
                return Ok(SubscriberId(index));
            }
        }

        if self.slots.len() == self.slots.capacity() {
            return Err(subscriber);
        }

        let index = self.slots.len();
        // Cannot fail, capacity was checked above
        let _ = self.slots.push(Some(subscriber));
        debug!("bus: subscriber attached in slot {}", index);
        Ok(SubscriberId(index))
    }

    /// Detach a subscriber, freeing its slot
    ///
    /// Returns `None` when the handle does not name an attached subscriber.
    pub fn detach(&mut self, id: SubscriberId) -> Option<S> {
        let subscriber = self.slots.get_mut(id.0)?.take()?;
        debug!("bus: subscriber detached from slot {}", id.0);
        Some(subscriber)
    }

    /// Number of currently attached subscribers
    pub fn subscriber_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Borrow the actuator sink
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Mutably borrow the actuator sink
    pub fn actuator_mut(&mut self) -> &mut A {
        &mut self.actuator
    }

    /// Tear the bus down, releasing the actuator
    pub fn into_actuator(self) -> A {
        self.actuator
    }
}

impl<S: BusSubscriber, A: CommandSink> ServiceBus<S, A> {
    /// Deliver an event to every attached subscriber
    ///
    /// Handlers run synchronously in slot order; commands they publish are
    /// forwarded to the actuator before this call returns.
    pub fn publish_event(&mut self, event: VehicleEvent) {
        debug!("bus: delivering {}", event);
        for subscriber in self.slots.iter_mut().flatten() {
            subscriber.handle(event, &mut self.actuator);
        }
    }
}

impl<S, A: CommandSink> CommandSink for ServiceBus<S, A> {
    fn publish(&mut self, command: BrakeCommand) {
        self.actuator.publish(command);
    }
}
