//! Input subsystem: debounced switches, the photocell, and the
//! aggregating [`InputHub`].
//!
//! The hub owns every input driver and produces one [`InputSnapshot`]
//! per control cycle.

pub mod light;

use embedded_hal::digital::InputPin;

use crate::config::DoorConfig;
use crate::drivers::button::DebouncedInput;
use crate::time::Instant;
use light::{LightReading, LightSensor};

/// Point-in-time view of every input, already debounced and inverted
/// (`true` = asserted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub open_pressed: bool,
    pub close_pressed: bool,
    pub estop_pressed: bool,
    pub override_active: bool,
    /// Interior light switch; mirrored to the relay, not used by the core.
    pub light_switch: bool,
    pub light: LightReading,
}

/// The five switch inputs, in wiring order.
pub struct SwitchPins<I> {
    pub open: I,
    pub close: I,
    pub light: I,
    pub manual_override: I,
    pub estop: I,
}

/// Aggregates the input drivers.
pub struct InputHub<I, R> {
    open: DebouncedInput<I>,
    close: DebouncedInput<I>,
    light_switch: DebouncedInput<I>,
    manual_override: DebouncedInput<I>,
    estop: DebouncedInput<I>,
    photocell: LightSensor<R>,
}

impl<I, R> InputHub<I, R>
where
    I: InputPin,
    R: FnMut() -> u16,
{
    pub fn new(pins: SwitchPins<I>, photocell: LightSensor<R>, config: &DoorConfig) -> Self {
        let window = config.debounce();
        Self {
            open: DebouncedInput::new(pins.open, "open", window),
            close: DebouncedInput::new(pins.close, "close", window),
            light_switch: DebouncedInput::new(pins.light, "light", window),
            manual_override: DebouncedInput::new(pins.manual_override, "override", window),
            estop: DebouncedInput::new(pins.estop, "estop", config.estop_debounce()),
            photocell,
        }
    }

    /// Sample every input once.  Never blocks.
    pub fn sample(&mut self, now: Instant) -> InputSnapshot {
        InputSnapshot {
            estop_pressed: self.estop.sample(now),
            open_pressed: self.open.sample(now),
            close_pressed: self.close.sample(now),
            override_active: self.manual_override.sample(now),
            light_switch: self.light_switch.sample(now),
            light: self.photocell.read(),
        }
    }
}
