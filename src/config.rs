//! System configuration parameters
//!
//! All tunable parameters for one door installation.  There is no
//! persistence: the values are compiled in (or parsed from a JSON document
//! on the host) and validated once at boot.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::control::hysteresis::Thresholds;
use crate::error::ConfigError;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    // --- Actuator ---
    /// Seconds the linear actuator needs for a full open or close stroke.
    pub run_time_secs: u16,

    // --- Photocell thresholds ---
    /// Readings below this close an open door (dusk).
    pub evening_threshold: u16,
    /// Readings above this open a closed door (dawn).
    pub day_threshold: u16,

    // --- Inputs ---
    /// Hold time before a button level change is accepted (milliseconds).
    pub debounce_ms: u32,
    /// Debounce for the emergency-stop input; 0 accepts the first sample.
    pub estop_debounce_ms: u32,

    // --- Timing ---
    /// Delay between control loop iterations (milliseconds).
    pub control_loop_interval_ms: u32,
    /// Telemetry report interval (seconds)
    pub telemetry_interval_secs: u32,
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            run_time_secs: 15,

            // Values for the reference installation; adjust per site.
            evening_threshold: 6000,
            day_threshold: 20000,

            debounce_ms: 50,
            estop_debounce_ms: 0,

            control_loop_interval_ms: 100, // 10 Hz
            telemetry_interval_secs: 10,
        }
    }
}

impl DoorConfig {
    /// Reject configurations the controller cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run_time_secs == 0 {
            return Err(ConfigError::ZeroRunTime);
        }
        if self.control_loop_interval_ms == 0 {
            return Err(ConfigError::ZeroLoopInterval);
        }
        self.thresholds().map(|_| ())
    }

    /// Parse a JSON document and validate it.  Missing fields take their
    /// default values.
    pub fn from_json(doc: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(doc).map_err(|_| ConfigError::Malformed)?;
        config.validate()?;
        Ok(config)
    }

    pub fn run_time(&self) -> Duration {
        Duration::from_secs(u64::from(self.run_time_secs))
    }

    pub fn thresholds(&self) -> Result<Thresholds, ConfigError> {
        Thresholds::new(self.evening_threshold, self.day_threshold)
    }

    pub fn loop_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.control_loop_interval_ms))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.debounce_ms))
    }

    pub fn estop_debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.estop_debounce_ms))
    }
}
