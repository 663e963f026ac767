//! Application core: pure domain logic, zero I/O.
//!
//! Command arbitration, the door service that runs each control cycle, and
//! the events it emits.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer testable
//! without real peripherals.

pub mod arbiter;
pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
