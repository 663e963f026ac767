//! DoorService → MotionController → H-bridge pipeline, driven through the
//! hardware adapter with mock pins.

use crate::mock_hw::Rig;

use coopdoor::app::commands::{CommandRequest, CommandSource, DoorCommand};
use coopdoor::app::events::AppEvent;
use coopdoor::config::DoorConfig;
use coopdoor::motion::MotionState;
use coopdoor::motion::position::DoorPosition;
use coopdoor::time::Instant;

/// Debounce off so a press registers on the cycle it is made.
fn instant_inputs() -> DoorConfig {
    DoorConfig {
        debounce_ms: 0,
        ..DoorConfig::default()
    }
}

fn ms(v: u64) -> Instant {
    Instant::from_millis(v)
}

fn is_command(cmd: DoorCommand) -> impl Fn(&AppEvent) -> bool {
    move |e: &AppEvent| matches!(e, AppEvent::CommandIssued(r) if r.command == cmd)
}

// ── Boot, timeout, manual close ───────────────────────────────

#[test]
fn boot_runs_to_timeout_then_close_button_closes() {
    let mut rig = Rig::new(instant_inputs());

    rig.boot(ms(0));
    assert_eq!(rig.service.state(), MotionState::Opening);
    assert_eq!(rig.service.position(), DoorPosition::Open);
    assert_eq!(rig.outputs(), (true, false));

    rig.run(ms(100), ms(14_900), 100);
    assert_eq!(rig.service.state(), MotionState::Opening);
    assert_eq!(rig.outputs(), (true, false));

    rig.tick(ms(15_000));
    assert_eq!(rig.service.state(), MotionState::Idle);
    assert_eq!(rig.outputs(), (false, false));

    rig.panel.close.press();
    rig.tick(ms(15_100));
    assert_eq!(rig.service.state(), MotionState::Closing);
    assert_eq!(rig.service.position(), DoorPosition::Closed);
    assert_eq!(rig.service.deadline(), Some(ms(30_100)));
    assert_eq!(rig.outputs(), (false, true));
    assert!(!rig.bridge.overlapped.get());
}

#[test]
fn held_button_keeps_pushing_the_deadline_out() {
    let mut rig = Rig::new(instant_inputs());
    rig.panel.open.press();
    rig.run(ms(0), ms(20_000), 100);

    assert_eq!(rig.service.state(), MotionState::Opening);
    assert_eq!(rig.service.deadline(), Some(ms(35_000)));
    assert_eq!(rig.sink.count(is_command(DoorCommand::Open)), 1);

    rig.panel.open.release();
    rig.run(ms(20_100), ms(35_000), 100);
    assert_eq!(rig.service.state(), MotionState::Idle);
}

#[test]
fn reversing_mid_stroke_never_overlaps_outputs() {
    let mut rig = Rig::new(instant_inputs());
    rig.boot(ms(0));
    rig.run(ms(100), ms(5_000), 100);

    rig.panel.close.press();
    rig.tick(ms(5_100));
    rig.panel.close.release();
    assert_eq!(rig.service.state(), MotionState::Closing);
    assert_eq!(rig.outputs(), (false, true));

    rig.panel.open.press();
    rig.tick(ms(5_200));
    rig.panel.open.release();
    assert_eq!(rig.service.state(), MotionState::Opening);
    assert_eq!(rig.outputs(), (true, false));
    assert!(!rig.bridge.overlapped.get());
}

// ── Light-driven operation ────────────────────────────────────

#[test]
fn dusk_closes_once_and_dawn_reopens() {
    let mut rig = Rig::new(instant_inputs());
    rig.boot(ms(0));
    rig.run(ms(100), ms(15_000), 100);
    rig.sink.clear();

    rig.panel.lux.set(5_000);
    rig.run(ms(15_100), ms(40_000), 100);
    assert_eq!(rig.sink.count(is_command(DoorCommand::Close)), 1);
    assert_eq!(rig.service.position(), DoorPosition::Closed);
    assert_eq!(rig.service.state(), MotionState::Idle);

    // Inside the band nothing happens.
    rig.panel.lux.set(15_000);
    rig.run(ms(40_100), ms(45_000), 100);
    assert_eq!(rig.service.state(), MotionState::Idle);

    rig.panel.lux.set(25_000);
    rig.tick(ms(45_100));
    assert_eq!(rig.service.state(), MotionState::Opening);
    assert_eq!(rig.service.position(), DoorPosition::Open);
    assert!(rig.sink.events.contains(&AppEvent::CommandIssued(
        CommandRequest::new(DoorCommand::Open, CommandSource::Light)
    )));
}

#[test]
fn override_blocks_light_and_lights_the_led() {
    let mut rig = Rig::new(instant_inputs());
    rig.boot(ms(0));
    rig.run(ms(100), ms(15_000), 100);

    rig.panel.manual_override.press();
    rig.panel.lux.set(100);
    rig.run(ms(15_100), ms(30_000), 100);

    assert!(rig.panel.override_led.get());
    assert_eq!(rig.service.state(), MotionState::Idle);
    assert_eq!(rig.service.position(), DoorPosition::Open);

    // Buttons still work under override.
    rig.panel.close.press();
    rig.tick(ms(30_100));
    assert_eq!(rig.service.state(), MotionState::Closing);

    rig.panel.manual_override.release();
    rig.panel.close.release();
    rig.tick(ms(30_200));
    assert!(!rig.panel.override_led.get());
    assert_eq!(rig.sink.count(|e| matches!(e, AppEvent::OverrideChanged(_))), 2);
}

// ── Emergency stop ────────────────────────────────────────────

#[test]
fn estop_halts_motion_and_holds_off_buttons() {
    let mut rig = Rig::new(instant_inputs());
    rig.boot(ms(0));
    rig.run(ms(100), ms(3_000), 100);

    rig.panel.estop.press();
    rig.tick(ms(3_100));
    assert_eq!(rig.service.state(), MotionState::Idle);
    assert_eq!(rig.outputs(), (false, false));
    assert_eq!(rig.service.deadline(), None);
    assert_eq!(rig.service.position(), DoorPosition::Open);

    rig.panel.close.press();
    rig.run(ms(3_200), ms(5_000), 100);
    assert_eq!(rig.service.state(), MotionState::Idle);
    assert_eq!(rig.outputs(), (false, false));

    rig.panel.estop.release();
    rig.tick(ms(5_100));
    assert_eq!(rig.service.state(), MotionState::Closing);

    assert_eq!(rig.sink.count(|e| *e == AppEvent::EmergencyStop), 1);
    assert_eq!(rig.sink.count(|e| *e == AppEvent::EmergencyStopReleased), 1);
    assert_eq!(rig.service.telemetry(ms(5_100)).estop_trips, 1);
}

#[test]
fn estop_is_not_slowed_by_button_debounce() {
    let mut rig = Rig::new(DoorConfig::default());
    rig.boot(ms(0));

    rig.panel.estop.press();
    rig.tick(ms(10));
    assert_eq!(rig.service.state(), MotionState::Idle);
}

// ── Debounce ──────────────────────────────────────────────────

#[test]
fn short_blip_on_a_button_is_ignored() {
    let mut rig = Rig::new(DoorConfig::default());

    rig.panel.open.press();
    rig.tick(ms(0));
    rig.tick(ms(20));
    rig.panel.open.release();
    rig.tick(ms(40));
    rig.run(ms(60), ms(500), 20);
    assert_eq!(rig.service.state(), MotionState::Idle);

    rig.panel.open.press();
    rig.run(ms(520), ms(580), 20);
    assert_eq!(rig.service.state(), MotionState::Opening);
}

// ── Telemetry ─────────────────────────────────────────────────

#[test]
fn telemetry_reflects_the_running_motion() {
    let mut rig = Rig::new(instant_inputs());
    rig.boot(ms(0));
    rig.run(ms(100), ms(5_000), 100);

    let t = rig.service.telemetry(ms(5_000));
    assert_eq!(t.state, MotionState::Opening);
    assert_eq!(t.position, DoorPosition::Open);
    assert_eq!(t.remaining_ms, 10_000);
    assert!(t.outputs.drive_open);
    assert!(!t.outputs.drive_close);
    assert_eq!(t.light.value(), 12_000);
}
