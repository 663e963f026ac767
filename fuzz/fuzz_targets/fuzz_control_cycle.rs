//! Fuzz target: `DoorService::step`
//!
//! Each 3-byte chunk is one control cycle: a switch bitmask and a 16-bit
//! light reading.  The H-bridge lines must never be high together and an
//! asserted e-stop must always leave the door Idle.
//!
//! cargo fuzz run fuzz_control_cycle

#![no_main]

use core::cell::Cell;
use core::convert::Infallible;
use std::rc::Rc;

use coopdoor::app::events::AppEvent;
use coopdoor::app::ports::EventSink;
use coopdoor::app::service::DoorService;
use coopdoor::config::DoorConfig;
use coopdoor::drivers::actuator::ActuatorDriver;
use coopdoor::motion::MotionState;
use coopdoor::sensors::InputSnapshot;
use coopdoor::sensors::light::LightReading;
use coopdoor::time::Instant;
use embedded_hal::digital::{ErrorType, OutputPin};
use libfuzzer_sys::fuzz_target;

struct Line(Rc<[Cell<bool>; 2]>, usize);

impl ErrorType for Line {
    type Error = Infallible;
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0[self.1].set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0[self.1].set(true);
        assert!(!(self.0[0].get() && self.0[1].get()), "shoot-through");
        Ok(())
    }
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let lines = Rc::new([Cell::new(false), Cell::new(false)]);
    let driver = ActuatorDriver::new(Line(Rc::clone(&lines), 0), Line(Rc::clone(&lines), 1));
    let Ok(mut svc) = DoorService::new(DoorConfig::default(), driver) else {
        return;
    };
    let mut sink = Discard;
    if svc.boot(Instant::ZERO, &mut sink).is_err() {
        return;
    }

    let mut elapsed_ms = 0u64;
    for chunk in data.chunks_exact(3) {
        let bits = chunk[0];
        let snap = InputSnapshot {
            open_pressed: bits & 0x01 != 0,
            close_pressed: bits & 0x02 != 0,
            estop_pressed: bits & 0x04 != 0,
            override_active: bits & 0x08 != 0,
            light_switch: bits & 0x10 != 0,
            light: LightReading::new(u16::from_le_bytes([chunk[1], chunk[2]])),
        };
        // High bits of the mask stretch the gap between cycles.
        elapsed_ms += 100 + u64::from(bits >> 5) * 5_000;
        let now = Instant::from_millis(elapsed_ms);
        let report = svc.step(&snap, now, &mut sink);

        if snap.estop_pressed {
            assert_eq!(report.state, MotionState::Idle);
            assert!(report.outputs.is_neutral());
        }
    }
});
