//! Port traits: the hexagonal boundary between domain logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DoorService (domain)
//! ```
//!
//! Driven adapters (inputs, indicators, clock, event sinks) implement these
//! traits.  The [`DoorService`](super::service::DoorService) consumes them
//! via generics, so the domain core never touches hardware directly.  The
//! motor pins are the exception: the motion controller owns its actuator
//! driver outright, typed over `embedded_hal::digital::OutputPin`.

use crate::sensors::InputSnapshot;
use crate::time::Instant;

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: sample every input once per control cycle.
pub trait InputPort {
    fn sample(&mut self, now: Instant) -> InputSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for non-motor outputs the core decides.
pub trait IndicatorPort {
    /// Manual-override LED.
    fn set_override_indicator(&mut self, on: bool);

    /// Interior light relay.
    fn set_light_relay(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic time since boot.
pub trait ClockPort {
    fn now(&self) -> Instant;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
