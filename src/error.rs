//! Unified error types for the CoopDoor firmware.
//!
//! A single `Error` enum that every subsystem converts into, so the
//! control loop and the boot path handle failures uniformly.  All
//! variants are `Copy` and carry no heap data.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A motion command was rejected by the motion controller.
    Motion(MotionError),
    /// Configuration is invalid or could not be parsed.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Motion(e) => write!(f, "motion: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Motion errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionError {
    /// `open`/`close` called with a run duration under one millisecond,
    /// the resolution of the motion deadline.
    InvalidDuration,
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDuration => write!(f, "run duration must be at least 1 ms"),
        }
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Self::Motion(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Rejected at initialisation, never at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `evening_threshold` must be strictly below `day_threshold`.
    ThresholdOrder { evening: u16, day: u16 },
    /// Actuator run time is zero.
    ZeroRunTime,
    /// Control loop interval is zero.
    ZeroLoopInterval,
    /// Serialised config could not be parsed.
    Malformed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThresholdOrder { evening, day } => write!(
                f,
                "evening threshold {evening} must be below day threshold {day}"
            ),
            Self::ZeroRunTime => write!(f, "actuator run time must be non-zero"),
            Self::ZeroLoopInterval => write!(f, "control loop interval must be non-zero"),
            Self::Malformed => write!(f, "malformed config document"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
