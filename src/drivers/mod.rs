//! Actuator, indicator, and input drivers over `embedded-hal` pins.

pub mod actuator;
pub mod button;
pub mod indicator;
