//! Application service: the hexagonal core.
//!
//! [`DoorService`] owns the motion controller, the input arbiter, and the
//! e-stop supervisor.  It exposes a hardware-agnostic API; inputs and
//! indicators flow through port traits injected at call sites, and the
//! motor pins arrive already wrapped in an
//! [`ActuatorDriver`](crate::drivers::actuator::ActuatorDriver).
//!
//! ```text
//!    InputPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                  │       DoorService         │
//! IndicatorPort ◀──│ Arbiter · Motion · Safety │ ──▶ H-bridge IN1/IN2
//!                  └──────────────────────────┘
//! ```
//!
//! One [`tick`](DoorService::tick) is one control cycle:
//! sample inputs → e-stop edges → arbitrate → apply command →
//! deadline check → events → indicator and relay outputs.

use embedded_hal::digital::OutputPin;
use log::{debug, info, warn};

use crate::config::DoorConfig;
use crate::control::hysteresis::LightHysteresis;
use crate::drivers::actuator::{ActuatorDriver, ActuatorOutputs};
use crate::error::{ConfigError, Result};
use crate::motion::position::DoorPosition;
use crate::motion::{MotionController, MotionState};
use crate::safety::{EstopEdge, SafetySupervisor};
use crate::sensors::InputSnapshot;
use crate::time::Instant;

use super::arbiter::InputArbiter;
use super::commands::{CommandRequest, CommandSource, DoorCommand};
use super::events::{AppEvent, TelemetryData};
use super::ports::{EventSink, IndicatorPort, InputPort};

/// What one control cycle decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// The command applied this cycle, if any.
    pub command: Option<CommandRequest>,
    pub state: MotionState,
    pub position: DoorPosition,
    pub outputs: ActuatorOutputs,
    /// Desired override LED level.
    pub override_indicator: bool,
    /// Desired interior light relay level (mirrors the light switch).
    pub light_relay: bool,
}

// ───────────────────────────────────────────────────────────────
// DoorService
// ───────────────────────────────────────────────────────────────

pub struct DoorService<P> {
    config: DoorConfig,
    motion: MotionController<P>,
    arbiter: InputArbiter,
    safety: SafetySupervisor,
    /// Request applied on the previous cycle, for event de-duplication.
    last_request: Option<CommandRequest>,
    override_active: bool,
    last_inputs: InputSnapshot,
    cycles: u64,
}

impl<P: OutputPin> DoorService<P> {
    /// Validate `config` and take ownership of the actuator.
    ///
    /// The door starts Idle with position Closed; call [`boot`](Self::boot)
    /// before the first tick.
    pub fn new(
        config: DoorConfig,
        actuator: ActuatorDriver<P>,
    ) -> core::result::Result<Self, ConfigError> {
        config.validate()?;
        let light = LightHysteresis::new(config.thresholds()?);
        Ok(Self {
            config,
            motion: MotionController::new(actuator, DoorPosition::Closed),
            arbiter: InputArbiter::new(light),
            safety: SafetySupervisor::new(),
            last_request: None,
            override_active: false,
            last_inputs: InputSnapshot::default(),
            cycles: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Issue the power-on open so the logical position matches the door.
    pub fn boot(&mut self, now: Instant, sink: &mut impl EventSink) -> Result<()> {
        let request = CommandRequest::new(DoorCommand::Open, CommandSource::Boot);
        let before = (self.motion.state(), self.motion.position());
        self.motion.open(self.config.run_time(), now)?;
        sink.emit(&AppEvent::CommandIssued(request));
        self.emit_changes(before, sink);
        sink.emit(&AppEvent::Started {
            state: self.motion.state(),
            position: self.motion.position(),
        });
        info!(
            "DoorService started: opening for {}s",
            self.config.run_time_secs
        );
        Ok(())
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle against the hardware ports.
    ///
    /// `hw` satisfies both [`InputPort`] and [`IndicatorPort`] so a single
    /// adapter can own every pin without a double mutable borrow.
    pub fn tick(
        &mut self,
        hw: &mut (impl InputPort + IndicatorPort),
        now: Instant,
        sink: &mut impl EventSink,
    ) -> CycleReport {
        let inputs = hw.sample(now);
        let report = self.step(&inputs, now, sink);
        hw.set_override_indicator(report.override_indicator);
        hw.set_light_relay(report.light_relay);
        report
    }

    /// Run one control cycle on an already-sampled snapshot.
    pub fn step(
        &mut self,
        inputs: &InputSnapshot,
        now: Instant,
        sink: &mut impl EventSink,
    ) -> CycleReport {
        self.cycles += 1;
        self.last_inputs = *inputs;
        let before = (self.motion.state(), self.motion.position());

        // 1. E-stop edges (the stop itself is the arbiter's top priority)
        match self.safety.evaluate(inputs.estop_pressed) {
            Some(EstopEdge::Tripped) => sink.emit(&AppEvent::EmergencyStop),
            Some(EstopEdge::Released) => sink.emit(&AppEvent::EmergencyStopReleased),
            None => {}
        }

        // 2. Override mode
        if inputs.override_active != self.override_active {
            self.override_active = inputs.override_active;
            info!(
                "OVERRIDE: manual override {}",
                if self.override_active { "on" } else { "off" }
            );
            sink.emit(&AppEvent::OverrideChanged(self.override_active));
        }

        // 3. Arbitrate and apply at most one command
        let request = self.arbiter.resolve(inputs, self.motion.position());
        if let Some(req) = request {
            self.apply(req, now);
            if self.last_request == Some(req) {
                debug!("retrigger {:?} from {:?}", req.command, req.source);
            } else {
                sink.emit(&AppEvent::CommandIssued(req));
            }
        }
        self.last_request = request;

        // 4. Deadline check
        let moving = self.motion.state();
        if self.motion.tick(now) {
            sink.emit(&AppEvent::MotionCompleted(moving));
        }

        self.emit_changes(before, sink);

        CycleReport {
            command: request,
            state: self.motion.state(),
            position: self.motion.position(),
            outputs: self.motion.outputs(),
            override_indicator: self.override_active,
            light_relay: inputs.light_switch,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn telemetry(&self, now: Instant) -> TelemetryData {
        TelemetryData {
            state: self.motion.state(),
            position: self.motion.position(),
            light: self.last_inputs.light,
            override_active: self.override_active,
            estop_active: self.safety.is_estop_active(),
            outputs: self.motion.outputs(),
            remaining_ms: self.motion.remaining(now).as_millis() as u64,
            commands_accepted: self.motion.commands_accepted(),
            estop_trips: self.safety.trips(),
            cycles: self.cycles,
        }
    }

    pub fn state(&self) -> MotionState {
        self.motion.state()
    }

    pub fn position(&self) -> DoorPosition {
        self.motion.position()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.motion.deadline()
    }

    pub fn outputs(&self) -> ActuatorOutputs {
        self.motion.outputs()
    }

    pub fn config(&self) -> &DoorConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn apply(&mut self, req: CommandRequest, now: Instant) {
        let run_time = self.config.run_time();
        let result = match req.command {
            DoorCommand::EmergencyStop => {
                self.motion.emergency_stop();
                Ok(())
            }
            DoorCommand::Open => self.motion.open(run_time, now),
            DoorCommand::Close => self.motion.close(run_time, now),
        };
        if let Err(e) = result {
            warn!("{:?} from {:?} rejected: {}", req.command, req.source, e);
        }
    }

    fn emit_changes(&self, before: (MotionState, DoorPosition), sink: &mut impl EventSink) {
        let (state, position) = before;
        if self.motion.state() != state {
            sink.emit(&AppEvent::MotionChanged {
                from: state,
                to: self.motion.state(),
            });
        }
        if self.motion.position() != position {
            sink.emit(&AppEvent::PositionChanged {
                from: position,
                to: self.motion.position(),
            });
        }
    }
}
