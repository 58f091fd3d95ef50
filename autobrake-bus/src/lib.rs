//! Synchronous in-process event bus for AutoBrake decision units
//!
//! This crate is the reference transport behind the bus traits in
//! `autobrake-core`. It targets single-ECU deployments and host testing:
//! subscriber slots have a fixed capacity and every delivery happens
//! synchronously on the publisher's calling thread. Nothing allocates.
//!
//! A production vehicle bus (a CAN bridge, for example) replaces this crate
//! by implementing the same traits; the decision logic does not change.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod service;

pub use service::{ServiceBus, SubscriberId, MAX_SUBSCRIBERS};
