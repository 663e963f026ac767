//! Door commands and where they came from.
//!
//! The [`InputArbiter`](super::arbiter::InputArbiter) resolves each cycle's
//! inputs into at most one [`CommandRequest`]; the
//! [`DoorService`](super::service::DoorService) applies it to the motion
//! controller.

/// An action for the motion controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorCommand {
    /// Drive open for the configured run time.
    Open,
    /// Drive closed for the configured run time.
    Close,
    /// Neutral outputs immediately, from any state.
    EmergencyStop,
}

/// Which input produced a command, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandSource {
    EmergencyStop,
    Button,
    Light,
    /// The open issued once at power-on.
    Boot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandRequest {
    pub command: DoorCommand,
    pub source: CommandSource,
}

impl CommandRequest {
    pub const fn new(command: DoorCommand, source: CommandSource) -> Self {
        Self { command, source }
    }
}
