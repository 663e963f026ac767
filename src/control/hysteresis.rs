//! Two-threshold light comparator for automatic door control.
//!
//! ```text
//!   reading ─────────────────────────────────────────────▶
//!   0      evening_threshold           day_threshold    65535
//!   │  close │◀──────── dead band ────────▶│ open       │
//! ```
//!
//! An open door closes once the photocell falls below the evening
//! threshold; a closed door opens once it rises above the day threshold.
//! Readings inside the dead band never issue a command, so a reading
//! hovering around either boundary cannot make the door oscillate.

use log::info;

use crate::app::commands::DoorCommand;
use crate::error::ConfigError;
use crate::motion::position::DoorPosition;
use crate::sensors::light::LightReading;

/// Validated `{evening, day}` pair with `evening < day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    evening: u16,
    day: u16,
}

impl Thresholds {
    pub fn new(evening: u16, day: u16) -> Result<Self, ConfigError> {
        if evening >= day {
            return Err(ConfigError::ThresholdOrder { evening, day });
        }
        Ok(Self { evening, day })
    }
}

/// Stateless light evaluator; door position is the only memory it needs.
#[derive(Debug, Clone, Copy)]
pub struct LightHysteresis {
    thresholds: Thresholds,
}

impl LightHysteresis {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Decide whether the light level calls for a door command.
    ///
    /// Returns `None` whenever manual override is active.
    pub fn evaluate(
        &self,
        position: DoorPosition,
        reading: LightReading,
        override_active: bool,
    ) -> Option<DoorCommand> {
        if override_active {
            return None;
        }

        let level = reading.value();
        match position {
            DoorPosition::Open if level < self.thresholds.evening => {
                info!(
                    "LIGHT: {} < evening {} → closing",
                    level, self.thresholds.evening
                );
                Some(DoorCommand::Close)
            }
            DoorPosition::Closed if level > self.thresholds.day => {
                info!("LIGHT: {} > day {} → opening", level, self.thresholds.day);
                Some(DoorCommand::Open)
            }
            _ => None,
        }
    }
}
