//! CoopDoor firmware library.
//!
//! Exposes the pure-logic modules for integration testing and for the
//! ESP-IDF binary.  Nothing here touches ESP-IDF except the clock adapter,
//! which is gated on the `espidf` feature.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod motion;
pub mod pins;
pub mod safety;
pub mod time;

pub mod adapters;
pub mod drivers;
pub mod sensors;

pub use error::{ConfigError, Error, MotionError, Result};
