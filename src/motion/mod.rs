//! Timed motion state machine for the door actuator.
//!
//! ```text
//!          open(d)                 close(d)
//!   IDLE ──────────▶ OPENING    IDLE ──────────▶ CLOSING
//!    ▲                  │         ▲                  │
//!    └──[now ≥ deadline]┘         └──[now ≥ deadline]┘
//!
//!   OPENING ◀──close/open──▶ CLOSING   (retrigger: deadline restarts)
//!   any state ──stop / emergency_stop──▶ IDLE
//! ```
//!
//! There is no end-of-travel sensor.  A motion ends only when
//! [`MotionController::tick`] sees the deadline pass, or on an explicit
//! stop.  Nothing in this module blocks: `open`/`close` arm a deadline and
//! return, and the control loop calls `tick` once per cycle.

pub mod position;

use core::time::Duration;

use embedded_hal::digital::OutputPin;
use log::{error, info};

use crate::drivers::actuator::{ActuatorDriver, ActuatorOutputs};
use crate::error::MotionError;
use crate::time::Instant;
use position::{DoorPosition, PositionModel};

/// Shortest run `open`/`close` accept.
pub const MIN_RUN: Duration = Duration::from_millis(1);

/// Motion controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MotionState {
    Idle = 0,
    Opening = 1,
    Closing = 2,
}

impl MotionState {
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Opening => "Opening",
            Self::Closing => "Closing",
        }
    }

    pub fn is_moving(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Owns the actuator, the running state, its deadline, and the logical
/// door position.
///
/// Invariant: `deadline.is_some() == state.is_moving()`, and the driver
/// outputs always match `state`.
pub struct MotionController<P> {
    driver: ActuatorDriver<P>,
    state: MotionState,
    deadline: Option<Instant>,
    position: PositionModel,
}

impl<P: OutputPin> MotionController<P> {
    /// Idle, outputs neutral, position as given.
    pub fn new(driver: ActuatorDriver<P>, initial: DoorPosition) -> Self {
        let mut controller = Self {
            driver,
            state: MotionState::Idle,
            deadline: None,
            position: PositionModel::new(initial),
        };
        controller.driver.neutral();
        controller
    }

    // ── Commands ──────────────────────────────────────────────

    /// Drive the door open for `duration`, starting at `now`.
    pub fn open(&mut self, duration: Duration, now: Instant) -> Result<(), MotionError> {
        self.begin(MotionState::Opening, duration, now)
    }

    /// Drive the door closed for `duration`, starting at `now`.
    pub fn close(&mut self, duration: Duration, now: Instant) -> Result<(), MotionError> {
        self.begin(MotionState::Closing, duration, now)
    }

    /// Neutral outputs, Idle.  Always succeeds.
    pub fn stop(&mut self) {
        if self.state.is_moving() {
            info!("MOTION: {} stopped", self.state.name());
        }
        self.driver.neutral();
        self.state = MotionState::Idle;
        self.deadline = None;
    }

    /// Highest-priority stop.  Same effect as [`stop`](Self::stop), from
    /// any state, discarding any pending deadline.
    pub fn emergency_stop(&mut self) {
        if self.state.is_moving() {
            error!("MOTION: emergency stop while {}", self.state.name());
        }
        self.stop();
    }

    /// Auto-stop check; call once per control cycle.
    ///
    /// Returns `true` if a timed motion completed on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                info!(
                    "MOTION: {} complete at {}ms",
                    self.state.name(),
                    now.as_millis()
                );
                self.stop();
                true
            }
            _ => false,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn position(&self) -> DoorPosition {
        self.position.current()
    }

    /// Auto-stop time of the running motion; `None` while Idle.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn outputs(&self) -> ActuatorOutputs {
        self.driver.outputs()
    }

    /// Time left on the running motion (zero while Idle).
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline
            .map_or(Duration::ZERO, |d| d.saturating_duration_since(now))
    }

    /// Accepted open/close commands since boot.
    pub fn commands_accepted(&self) -> u32 {
        self.position.commands()
    }

    // ── Internal ──────────────────────────────────────────────

    fn begin(
        &mut self,
        target: MotionState,
        duration: Duration,
        now: Instant,
    ) -> Result<(), MotionError> {
        // Deadlines are whole milliseconds.
        if duration < MIN_RUN {
            return Err(MotionError::InvalidDuration);
        }

        // Same direction: keep driving, only the deadline restarts.
        if target != self.state {
            match target {
                MotionState::Opening => self.driver.drive_open_direction(),
                MotionState::Closing => self.driver.drive_close_direction(),
                MotionState::Idle => self.driver.neutral(),
            }
            info!(
                "MOTION: {} -> {} for {}ms",
                self.state.name(),
                target.name(),
                duration.as_millis()
            );
        }

        self.state = target;
        self.deadline = Some(now + duration);
        self.position.record(match target {
            MotionState::Closing => DoorPosition::Closed,
            _ => DoorPosition::Open,
        });
        Ok(())
    }
}
