//! Logical door position.
//!
//! There is no door sensor.  Position is what the last accepted open/close
//! command asked for, recorded when the command is issued rather than when
//! the stroke finishes.  An emergency stop mid-stroke therefore leaves the
//! recorded position at the commanded end.

/// Where the door was last commanded to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DoorPosition {
    Open = 0,
    Closed = 1,
}

impl DoorPosition {
    pub fn name(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

/// Position holder owned by the motion controller.
#[derive(Debug, Clone, Copy)]
pub struct PositionModel {
    current: DoorPosition,
    /// Accepted open/close commands since boot.
    commands: u32,
}

impl PositionModel {
    pub fn new(initial: DoorPosition) -> Self {
        Self {
            current: initial,
            commands: 0,
        }
    }

    pub fn current(&self) -> DoorPosition {
        self.current
    }

    pub fn commands(&self) -> u32 {
        self.commands
    }

    /// Record one accepted command.  Trusts the caller.
    pub fn record(&mut self, target: DoorPosition) {
        self.current = target;
        self.commands = self.commands.saturating_add(1);
    }
}
