//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (the ESP-IDF logger on the device, UART / USB-CDC).

use log::{error, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | state={} door={} | light={} | override={} estop={} | \
                     in1={} in2={} | remaining={}ms | cmds={} trips={} cycles={}",
                    t.state.name(),
                    t.position.name(),
                    t.light.value(),
                    t.override_active,
                    t.estop_active,
                    u8::from(t.outputs.drive_open),
                    u8::from(t.outputs.drive_close),
                    t.remaining_ms,
                    t.commands_accepted,
                    t.estop_trips,
                    t.cycles,
                );
            }
            AppEvent::Started { state, position } => {
                info!("START | state={} door={}", state.name(), position.name());
            }
            AppEvent::CommandIssued(req) => {
                info!("CMD | {:?} from {:?}", req.command, req.source);
            }
            AppEvent::MotionChanged { from, to } => {
                info!("MOTION | {} -> {}", from.name(), to.name());
            }
            AppEvent::MotionCompleted(state) => {
                info!("MOTION | {} complete", state.name());
            }
            AppEvent::PositionChanged { from, to } => {
                info!("DOOR | {} -> {}", from.name(), to.name());
            }
            AppEvent::EmergencyStop => {
                error!("ESTOP | asserted, outputs neutral");
            }
            AppEvent::EmergencyStopReleased => {
                info!("ESTOP | released");
            }
            AppEvent::OverrideChanged(on) => {
                info!("OVERRIDE | {}", if *on { "on" } else { "off" });
            }
        }
    }
}
