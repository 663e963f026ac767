//! Mock hardware for integration tests.
//!
//! Shared-level pins stand in for the ESP32 GPIOs so tests can flip
//! switches and inspect outputs while the service owns the drivers.  The
//! H-bridge mock records whether IN1 and IN2 were ever high together.

use core::convert::Infallible;
use std::cell::Cell;
use std::rc::Rc;

use coopdoor::adapters::hardware::HardwareAdapter;
use coopdoor::app::events::AppEvent;
use coopdoor::app::ports::EventSink;
use coopdoor::app::service::DoorService;
use coopdoor::config::DoorConfig;
use coopdoor::drivers::actuator::ActuatorDriver;
use coopdoor::sensors::light::LightSensor;
use coopdoor::sensors::{InputHub, SwitchPins};
use coopdoor::time::Instant;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

// ── Input pins ────────────────────────────────────────────────

/// Active-low switch; `pressed` drives the line low.
#[derive(Clone, Default)]
pub struct Switch(Rc<Cell<bool>>);

impl Switch {
    pub fn press(&self) {
        self.0.set(true);
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

pub struct MockInput(Switch);

impl ErrorType for MockInput {
    type Error = Infallible;
}

impl InputPin for MockInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.0.get())
    }
}

// ── Output pins ───────────────────────────────────────────────

#[derive(Default)]
pub struct Bridge {
    pub in1: Cell<bool>,
    pub in2: Cell<bool>,
    pub overlapped: Cell<bool>,
}

#[derive(Clone)]
pub enum Wire {
    In1(Rc<Bridge>),
    In2(Rc<Bridge>),
    Plain(Rc<Cell<bool>>),
}

pub struct MockOutput(Wire);

impl MockOutput {
    fn write(&mut self, high: bool) {
        let bridge = match &self.0 {
            Wire::In1(b) => {
                b.in1.set(high);
                b
            }
            Wire::In2(b) => {
                b.in2.set(high);
                b
            }
            Wire::Plain(level) => return level.set(high),
        };
        if bridge.in1.get() && bridge.in2.get() {
            bridge.overlapped.set(true);
        }
    }
}

impl ErrorType for MockOutput {
    type Error = Infallible;
}

impl OutputPin for MockOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|&e| pred(e)).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Test rig ──────────────────────────────────────────────────

pub type Photocell = Box<dyn FnMut() -> u16>;
pub type Hardware = HardwareAdapter<MockInput, MockOutput, Photocell>;

/// The front panel a test pokes at.
#[derive(Default)]
pub struct Panel {
    pub open: Switch,
    pub close: Switch,
    pub light: Switch,
    pub manual_override: Switch,
    pub estop: Switch,
    /// Raw 16-bit photocell value.
    pub lux: Rc<Cell<u16>>,
    pub override_led: Rc<Cell<bool>>,
    pub light_relay: Rc<Cell<bool>>,
}

pub struct Rig {
    pub service: DoorService<MockOutput>,
    pub hw: Hardware,
    pub panel: Panel,
    pub bridge: Rc<Bridge>,
    pub sink: RecordingSink,
}

#[allow(dead_code)]
impl Rig {
    pub fn new(config: DoorConfig) -> Self {
        let panel = Panel::default();
        panel.lux.set(12_000);

        let bridge = Rc::new(Bridge::default());
        let actuator = ActuatorDriver::new(
            MockOutput(Wire::In1(Rc::clone(&bridge))),
            MockOutput(Wire::In2(Rc::clone(&bridge))),
        );

        let lux = Rc::clone(&panel.lux);
        let photocell: Photocell = Box::new(move || lux.get());
        let switches = SwitchPins {
            open: MockInput(panel.open.clone()),
            close: MockInput(panel.close.clone()),
            light: MockInput(panel.light.clone()),
            manual_override: MockInput(panel.manual_override.clone()),
            estop: MockInput(panel.estop.clone()),
        };
        let hub = InputHub::new(switches, LightSensor::new(photocell, 16), &config);
        let hw = HardwareAdapter::new(
            hub,
            MockOutput(Wire::Plain(Rc::clone(&panel.override_led))),
            MockOutput(Wire::Plain(Rc::clone(&panel.light_relay))),
        );

        let service = DoorService::new(config, actuator).expect("valid config");
        Self {
            service,
            hw,
            panel,
            bridge,
            sink: RecordingSink::default(),
        }
    }

    pub fn boot(&mut self, now: Instant) {
        self.service.boot(now, &mut self.sink).expect("boot open");
    }

    pub fn tick(&mut self, now: Instant) {
        self.service.tick(&mut self.hw, now, &mut self.sink);
    }

    /// Tick every `step_ms` from `from` up to and including `to`.
    pub fn run(&mut self, from: Instant, to: Instant, step_ms: u64) {
        let mut t = from.as_millis();
        while t <= to.as_millis() {
            self.tick(Instant::from_millis(t));
            t += step_ms;
        }
    }

    pub fn outputs(&self) -> (bool, bool) {
        (self.bridge.in1.get(), self.bridge.in2.get())
    }
}
