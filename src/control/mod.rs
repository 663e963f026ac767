//! Automatic control laws.

pub mod hysteresis;
