//! Emergency-stop supervisor.
//!
//! The e-stop switch is polled like every other input, and the arbiter
//! acts on it first on every cycle it is asserted.  The supervisor only
//! tracks the *edges* so the rest of the system hears about a trip once:
//!
//! 1. The switch asserts: the supervisor logs the trip, counts it, and
//!    reports [`EstopEdge::Tripped`].
//! 2. While held, the arbiter keeps issuing emergency stops every cycle;
//!    the supervisor stays quiet.
//! 3. The switch releases: [`EstopEdge::Released`].  Nothing restarts on
//!    its own; the door waits for the next button or light command.

use log::{error, info};

/// Edge reported by [`SafetySupervisor::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstopEdge {
    Tripped,
    Released,
}

#[derive(Debug, Default)]
pub struct SafetySupervisor {
    estop_active: bool,
    /// Trips since boot.
    trips: u32,
}

impl SafetySupervisor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the debounced e-stop level for this cycle.
    pub fn evaluate(&mut self, estop_pressed: bool) -> Option<EstopEdge> {
        match (self.estop_active, estop_pressed) {
            (false, true) => {
                self.estop_active = true;
                self.trips = self.trips.saturating_add(1);
                error!("SAFETY: emergency stop asserted (trip #{})", self.trips);
                Some(EstopEdge::Tripped)
            }
            (true, false) => {
                self.estop_active = false;
                info!("SAFETY: emergency stop released");
                Some(EstopEdge::Released)
            }
            _ => None,
        }
    }

    pub fn is_estop_active(&self) -> bool {
        self.estop_active
    }

    pub fn trips(&self) -> u32 {
        self.trips
    }
}
