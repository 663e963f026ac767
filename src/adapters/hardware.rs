//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`InputHub`], the override LED and the light relay, exposing
//! them through [`InputPort`] and [`IndicatorPort`].  Sampling only reads;
//! the override LED and the light relay are written after the control
//! cycle through the indicator port.  Generic over `embedded-hal` pins so
//! the same adapter runs on ESP-IDF `PinDriver`s and on host mocks.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::app::ports::{IndicatorPort, InputPort};
use crate::drivers::indicator::Indicator;
use crate::sensors::{InputHub, InputSnapshot};
use crate::time::Instant;

/// Concrete adapter that combines all non-motor hardware behind port traits.
pub struct HardwareAdapter<I, O, R> {
    inputs: InputHub<I, R>,
    override_led: Indicator<O>,
    light_relay: Indicator<O>,
}

impl<I, O, R> HardwareAdapter<I, O, R>
where
    I: InputPin,
    O: OutputPin,
    R: FnMut() -> u16,
{
    pub fn new(inputs: InputHub<I, R>, override_led: O, light_relay: O) -> Self {
        Self {
            inputs,
            override_led: Indicator::new(override_led, "override_led"),
            light_relay: Indicator::new(light_relay, "light_relay"),
        }
    }

    pub fn override_led_on(&self) -> bool {
        self.override_led.is_on()
    }

    pub fn light_relay_on(&self) -> bool {
        self.light_relay.is_on()
    }
}

// ── InputPort implementation ──────────────────────────────────

impl<I, O, R> InputPort for HardwareAdapter<I, O, R>
where
    I: InputPin,
    O: OutputPin,
    R: FnMut() -> u16,
{
    fn sample(&mut self, now: Instant) -> InputSnapshot {
        self.inputs.sample(now)
    }
}

// ── IndicatorPort implementation ──────────────────────────────

impl<I, O, R> IndicatorPort for HardwareAdapter<I, O, R>
where
    I: InputPin,
    O: OutputPin,
    R: FnMut() -> u16,
{
    fn set_override_indicator(&mut self, on: bool) {
        self.override_led.set(on);
    }

    fn set_light_relay(&mut self, on: bool) {
        self.light_relay.set(on);
    }
}
