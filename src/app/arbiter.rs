//! Per-cycle command arbitration.
//!
//! Fixed priority, highest first:
//!
//! | # | Input asserted       | Command          | Source          |
//! |---|----------------------|------------------|-----------------|
//! | 1 | e-stop               | `EmergencyStop`  | `EmergencyStop` |
//! | 2 | open button          | `Open`           | `Button`        |
//! | 3 | close button         | `Close`          | `Button`        |
//! | 4 | (none of the above)  | light evaluator  | `Light`         |
//!
//! The first matching row wins and every other input is ignored for that
//! cycle, so at most one command is produced.  The light evaluator is
//! skipped while manual override is on.

use crate::control::hysteresis::LightHysteresis;
use crate::motion::position::DoorPosition;
use crate::sensors::InputSnapshot;

use super::commands::{CommandRequest, CommandSource, DoorCommand};

#[derive(Debug, Clone, Copy)]
pub struct InputArbiter {
    light: LightHysteresis,
}

impl InputArbiter {
    pub fn new(light: LightHysteresis) -> Self {
        Self { light }
    }

    /// Resolve one cycle's inputs into at most one command.
    pub fn resolve(
        &self,
        inputs: &InputSnapshot,
        position: DoorPosition,
    ) -> Option<CommandRequest> {
        if inputs.estop_pressed {
            return Some(CommandRequest::new(
                DoorCommand::EmergencyStop,
                CommandSource::EmergencyStop,
            ));
        }
        if inputs.open_pressed {
            return Some(CommandRequest::new(DoorCommand::Open, CommandSource::Button));
        }
        if inputs.close_pressed {
            return Some(CommandRequest::new(DoorCommand::Close, CommandSource::Button));
        }

        self.light
            .evaluate(position, inputs.light, inputs.override_active)
            .map(|cmd| CommandRequest::new(cmd, CommandSource::Light))
    }
}
