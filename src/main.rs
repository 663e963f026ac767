//! CoopDoor Firmware — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter          LogEventSink        MonotonicClock   │
//! │  (InputPort+IndicatorPort) (EventSink)        (ClockPort)      │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              DoorService (pure logic)                  │    │
//! │  │  Arbiter · MotionController · SafetySupervisor         │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop never blocks on motion: each pass samples inputs, runs one
//! control cycle and sleeps for the configured interval.
#![deny(unused_must_use)]

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use esp_idf_hal::adc::attenuation::DB_11;
use esp_idf_hal::adc::oneshot::config::AdcChannelConfig;
use esp_idf_hal::adc::oneshot::{AdcChannelDriver, AdcDriver};
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, Input, Output, PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::{info, warn};

use coopdoor::adapters::hardware::HardwareAdapter;
use coopdoor::adapters::log_sink::LogEventSink;
use coopdoor::adapters::time::MonotonicClock;
use coopdoor::app::events::AppEvent;
use coopdoor::app::ports::{ClockPort, EventSink};
use coopdoor::app::service::DoorService;
use coopdoor::config::DoorConfig;
use coopdoor::drivers::actuator::ActuatorDriver;
use coopdoor::pins;
use coopdoor::sensors::light::LightSensor;
use coopdoor::sensors::{InputHub, SwitchPins};
use coopdoor::Error;

/// Installation-specific overrides, baked in at build time.
const CONFIG_JSON: Option<&str> = option_env!("COOPDOOR_CONFIG");

// ── Pin helpers ───────────────────────────────────────────────

fn input_pin(gpio: i32) -> Result<PinDriver<'static, AnyIOPin, Input>> {
    // SAFETY: every GPIO number in `pins` is claimed exactly once, here or
    // in `output_pin`, and never through `Peripherals::pins`.
    let pin = unsafe { AnyIOPin::new(gpio) };
    let mut driver = PinDriver::input(pin)?;
    driver.set_pull(Pull::Up)?;
    Ok(driver)
}

fn output_pin(gpio: i32) -> Result<PinDriver<'static, AnyIOPin, Output>> {
    // SAFETY: see `input_pin`.
    let pin = unsafe { AnyIOPin::new(gpio) };
    Ok(PinDriver::output(pin)?)
}

fn load_config() -> DoorConfig {
    match CONFIG_JSON {
        Some(doc) => match DoorConfig::from_json(doc) {
            Ok(cfg) => {
                info!("Config loaded from COOPDOOR_CONFIG");
                cfg
            }
            Err(e) => {
                warn!("COOPDOOR_CONFIG rejected ({}), using defaults", e);
                DoorConfig::default()
            }
        },
        None => DoorConfig::default(),
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  CoopDoor v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = load_config();
    info!(
        "run_time={}s thresholds={}/{} loop={}ms",
        config.run_time_secs,
        config.evening_threshold,
        config.day_threshold,
        config.control_loop_interval_ms
    );

    // ── 3. Peripherals ────────────────────────────────────────
    let peripherals = Peripherals::take()?;

    let actuator = ActuatorDriver::new(
        output_pin(pins::ACTUATOR_IN1_GPIO)?,
        output_pin(pins::ACTUATOR_IN2_GPIO)?,
    );

    let adc = AdcDriver::new(peripherals.adc1)?;
    let adc_config = AdcChannelConfig {
        attenuation: DB_11,
        ..Default::default()
    };
    let mut photocell_channel =
        AdcChannelDriver::new(&adc, peripherals.pins.gpio36, &adc_config)?;
    let photocell = LightSensor::new(
        move || match photocell_channel.read() {
            Ok(raw) => raw,
            Err(e) => {
                warn!("photocell: ADC read failed ({}), reporting dark", e);
                0
            }
        },
        pins::PHOTOCELL_ADC_BITS,
    );

    let switches = SwitchPins {
        open: input_pin(pins::BUTTON_OPEN_GPIO)?,
        close: input_pin(pins::BUTTON_CLOSE_GPIO)?,
        light: input_pin(pins::BUTTON_LIGHT_GPIO)?,
        manual_override: input_pin(pins::SWITCH_OVERRIDE_GPIO)?,
        estop: input_pin(pins::SWITCH_ESTOP_GPIO)?,
    };

    let mut hw = HardwareAdapter::new(
        InputHub::new(switches, photocell, &config),
        output_pin(pins::LED_OVERRIDE_GPIO)?,
        output_pin(pins::LIGHT_RELAY_GPIO)?,
    );

    // ── 4. Application service ────────────────────────────────
    let clock = MonotonicClock::new();
    let mut log_sink = LogEventSink::new();

    let mut app = DoorService::new(config, actuator).map_err(Error::from)?;
    app.boot(clock.now(), &mut log_sink)?;

    let loop_interval_ms =
        u32::try_from(app.config().loop_interval().as_millis()).unwrap_or(u32::MAX);
    let telemetry_interval =
        core::time::Duration::from_secs(u64::from(app.config().telemetry_interval_secs));

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    let mut next_telemetry = clock.now() + telemetry_interval;

    loop {
        let now = clock.now();
        app.tick(&mut hw, now, &mut log_sink);

        if now >= next_telemetry {
            log_sink.emit(&AppEvent::Telemetry(app.telemetry(now)));
            next_telemetry = now + telemetry_interval;
        }

        FreeRtos::delay_ms(loop_interval_ms);
    }
}
