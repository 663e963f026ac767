//! Linear actuator driver (L298N H-bridge, IN1/IN2 direction inputs).
//!
//! | IN1 | IN2 | Motor            |
//! |-----|-----|------------------|
//! |  1  |  0  | extend (opening) |
//! |  0  |  1  | retract (closing)|
//! |  0  |  0  | coast (neutral)  |
//! |  1  |  1  | never driven     |
//!
//! ## Safety contract
//!
//! Both lines are never high together.  Every direction change lowers the
//! opposite line *before* raising the requested one, so the forbidden
//! state cannot appear even for the instant between two pin writes.
//!
//! Pin writes are treated as infallible: a failed write is logged and the
//! logical output pair still records what was commanded.

use embedded_hal::digital::OutputPin;
use log::warn;

/// Logical state of the two direction lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActuatorOutputs {
    pub drive_open: bool,
    pub drive_close: bool,
}

impl ActuatorOutputs {
    pub const NEUTRAL: Self = Self {
        drive_open: false,
        drive_close: false,
    };
    pub const OPENING: Self = Self {
        drive_open: true,
        drive_close: false,
    };
    pub const CLOSING: Self = Self {
        drive_open: false,
        drive_close: true,
    };

    pub fn is_neutral(&self) -> bool {
        !self.drive_open && !self.drive_close
    }
}

pub struct ActuatorDriver<P> {
    in1: P,
    in2: P,
    outputs: ActuatorOutputs,
}

impl<P: OutputPin> ActuatorDriver<P> {
    /// Take ownership of the direction pins and force them neutral.
    pub fn new(in1: P, in2: P) -> Self {
        let mut driver = Self {
            in1,
            in2,
            outputs: ActuatorOutputs::NEUTRAL,
        };
        driver.neutral();
        driver
    }

    pub fn drive_open_direction(&mut self) {
        write_line(&mut self.in2, "IN2", false);
        write_line(&mut self.in1, "IN1", true);
        self.outputs = ActuatorOutputs::OPENING;
    }

    pub fn drive_close_direction(&mut self) {
        write_line(&mut self.in1, "IN1", false);
        write_line(&mut self.in2, "IN2", true);
        self.outputs = ActuatorOutputs::CLOSING;
    }

    pub fn neutral(&mut self) {
        write_line(&mut self.in1, "IN1", false);
        write_line(&mut self.in2, "IN2", false);
        self.outputs = ActuatorOutputs::NEUTRAL;
    }

    pub fn outputs(&self) -> ActuatorOutputs {
        self.outputs
    }
}

fn write_line<P: OutputPin>(pin: &mut P, name: &str, high: bool) {
    let result = if high { pin.set_high() } else { pin.set_low() };
    if let Err(e) = result {
        warn!("actuator {}: write failed ({:?})", name, e);
    }
}
