//! GPIO / peripheral pin assignments for the coop door controller board.
//!
//! Single source of truth — `main` builds every driver from these numbers
//! rather than hard-coding pins.  Targets a classic ESP32 DevKit.

// ---------------------------------------------------------------------------
// Linear actuator (L298N H-bridge)
// ---------------------------------------------------------------------------

/// IN1: HIGH drives the actuator open.
pub const ACTUATOR_IN1_GPIO: i32 = 25;
/// IN2: HIGH drives the actuator closed.  Never HIGH together with IN1.
pub const ACTUATOR_IN2_GPIO: i32 = 26;

// ---------------------------------------------------------------------------
// Switches (active-low, internal pull-ups)
// ---------------------------------------------------------------------------

pub const BUTTON_OPEN_GPIO: i32 = 32;
pub const BUTTON_CLOSE_GPIO: i32 = 33;
/// Interior light toggle; mirrored to the relay.
pub const BUTTON_LIGHT_GPIO: i32 = 27;
/// Latching manual-override switch.
pub const SWITCH_OVERRIDE_GPIO: i32 = 14;
/// Emergency stop, normally open to ground.
pub const SWITCH_ESTOP_GPIO: i32 = 13;

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Manual-override indicator LED (active HIGH).
pub const LED_OVERRIDE_GPIO: i32 = 2;
/// Interior light relay (active HIGH).
pub const LIGHT_RELAY_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Photocell (ADC1)
// ---------------------------------------------------------------------------

// The photocell divider sits on ADC1 channel 0 (GPIO 36 / SENSOR_VP).  The
// ADC driver needs a typed pin, so `main` takes `peripherals.pins.gpio36`
// directly instead of a number from this table.

/// Raw ADC resolution, scaled up to 16 bits by the light sensor.
pub const PHOTOCELL_ADC_BITS: u32 = 12;
