//! HardwareAdapter glue: sampling, indicator and relay writes.

use crate::mock_hw::Rig;

use coopdoor::app::ports::{IndicatorPort, InputPort};
use coopdoor::config::DoorConfig;
use coopdoor::time::Instant;

fn rig() -> Rig {
    Rig::new(DoorConfig {
        debounce_ms: 0,
        ..DoorConfig::default()
    })
}

#[test]
fn sampling_leaves_the_light_relay_alone() {
    let mut rig = rig();

    rig.panel.light.press();
    let snap = rig.hw.sample(Instant::from_millis(0));
    assert!(snap.light_switch);
    assert!(!rig.panel.light_relay.get());
    assert!(!rig.hw.light_relay_on());
}

#[test]
fn light_relay_follows_the_switch_after_each_cycle() {
    let mut rig = rig();

    rig.panel.light.press();
    rig.tick(Instant::from_millis(0));
    assert!(rig.panel.light_relay.get());
    assert!(rig.hw.light_relay_on());

    rig.panel.light.release();
    rig.tick(Instant::from_millis(100));
    assert!(!rig.panel.light_relay.get());
}

#[test]
fn light_relay_port_drives_the_relay() {
    let mut rig = rig();

    rig.hw.set_light_relay(true);
    assert!(rig.panel.light_relay.get());

    rig.hw.set_light_relay(false);
    assert!(!rig.panel.light_relay.get());
}

#[test]
fn samples_are_inverted_from_active_low() {
    let mut rig = rig();
    rig.panel.estop.press();
    rig.panel.lux.set(777);

    let snap = rig.hw.sample(Instant::ZERO);
    assert!(snap.estop_pressed);
    assert!(!snap.open_pressed);
    assert!(!snap.close_pressed);
    assert!(!snap.override_active);
    assert_eq!(snap.light.value(), 777);
}

#[test]
fn override_indicator_port_drives_the_led() {
    let mut rig = rig();
    assert!(!rig.panel.override_led.get());

    rig.hw.set_override_indicator(true);
    assert!(rig.panel.override_led.get());
    assert!(rig.hw.override_led_on());

    rig.hw.set_override_indicator(false);
    assert!(!rig.panel.override_led.get());
}
