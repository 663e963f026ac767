//! Non-blocking debounced digital input.
//!
//! ## Hardware
//!
//! Active-low momentary switches (and the latching override / e-stop
//! switches) with pull-ups.  A LOW pin reads as logically *asserted*.
//!
//! ## Debounce
//!
//! Each sample is compared with a candidate level.  A change of raw level
//! restarts the hold timer; once the candidate has held for the debounce
//! window it becomes the stable level.  Nothing sleeps, so the control
//! cycle is never stalled by a bouncing contact.
//!
//! ```text
//!   raw      ‾‾‾|_|‾|_______________
//!   stable   ‾‾‾‾‾‾‾‾‾‾‾‾|__________
//!                 ◀─ debounce ─▶
//! ```

use core::time::Duration;

use embedded_hal::digital::InputPin;
use log::warn;

use crate::time::Instant;

/// Pin-free debounce state machine.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    window: Duration,
    stable: bool,
    candidate: bool,
    candidate_since: Instant,
}

impl Debouncer {
    /// Starts released.  A zero `window` accepts every sample immediately.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            stable: false,
            candidate: false,
            candidate_since: Instant::ZERO,
        }
    }

    /// Feed one logical sample; returns the debounced level.
    pub fn update(&mut self, asserted: bool, now: Instant) -> bool {
        if asserted != self.candidate {
            self.candidate = asserted;
            self.candidate_since = now;
        }

        if self.candidate != self.stable
            && now.saturating_duration_since(self.candidate_since) >= self.window
        {
            self.stable = self.candidate;
        }

        self.stable
    }

    pub fn is_asserted(&self) -> bool {
        self.stable
    }
}

/// An active-low input pin behind a [`Debouncer`].
pub struct DebouncedInput<P> {
    pin: P,
    name: &'static str,
    debouncer: Debouncer,
}

impl<P: InputPin> DebouncedInput<P> {
    pub fn new(pin: P, name: &'static str, window: Duration) -> Self {
        Self {
            pin,
            name,
            debouncer: Debouncer::new(window),
        }
    }

    /// Sample the pin and return the debounced, inverted level.
    ///
    /// A failed read keeps the previous stable level.
    pub fn sample(&mut self, now: Instant) -> bool {
        match self.pin.is_low() {
            Ok(low) => self.debouncer.update(low, now),
            Err(e) => {
                warn!("input {}: read failed ({:?}), holding level", self.name, e);
                self.debouncer.is_asserted()
            }
        }
    }
}
