//! Outbound application events.
//!
//! The [`DoorService`](super::service::DoorService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them; on the device they go to the serial
//! log.

use crate::drivers::actuator::ActuatorOutputs;
use crate::motion::MotionState;
use crate::motion::position::DoorPosition;
use crate::sensors::light::LightReading;

use super::commands::CommandRequest;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The boot-time open has been issued.
    Started {
        state: MotionState,
        position: DoorPosition,
    },

    /// A new command was applied.  Repeats of the same request on
    /// consecutive cycles (a held button) are not re-emitted.
    CommandIssued(CommandRequest),

    /// The motion state machine changed state.
    MotionChanged { from: MotionState, to: MotionState },

    /// The logical door position changed.
    PositionChanged { from: DoorPosition, to: DoorPosition },

    /// A timed motion reached its deadline.
    MotionCompleted(MotionState),

    /// The e-stop switch was asserted.
    EmergencyStop,

    /// The e-stop switch was released.
    EmergencyStopReleased,

    /// Manual override switched on (`true`) or off.
    OverrideChanged(bool),

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    pub state: MotionState,
    pub position: DoorPosition,
    pub light: LightReading,
    pub override_active: bool,
    pub estop_active: bool,
    pub outputs: ActuatorOutputs,
    /// Milliseconds left on the running motion.
    pub remaining_ms: u64,
    pub commands_accepted: u32,
    pub estop_trips: u32,
    /// Control cycles run since boot.
    pub cycles: u64,
}
