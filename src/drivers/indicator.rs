//! Single-line on/off outputs: the manual-override LED and the interior
//! light relay (active HIGH).
//!
//! Remembers the last level so the main loop can write every cycle without
//! toggling the pin when nothing changed.

use embedded_hal::digital::OutputPin;
use log::warn;

pub struct Indicator<P> {
    pin: P,
    name: &'static str,
    on: bool,
}

impl<P: OutputPin> Indicator<P> {
    /// Take the pin and drive it low.
    pub fn new(mut pin: P, name: &'static str) -> Self {
        if let Err(e) = pin.set_low() {
            warn!("{}: initial write failed ({:?})", name, e);
        }
        Self {
            pin,
            name,
            on: false,
        }
    }

    pub fn set(&mut self, on: bool) {
        if on == self.on {
            return;
        }
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        match result {
            Ok(()) => self.on = on,
            Err(e) => warn!("{}: write failed ({:?})", self.name, e),
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
