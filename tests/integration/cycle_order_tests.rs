//! Integration tests: call ordering across door, filter, pump and engine.

use super::mock_hw::{DeviceCall, EventLog, MockRig};

use dishwasher::{
    DishWasher, FillLevel, ProgramConfiguration, RunResult, Status, WashingProgram,
};

fn intensive_half(tablets: bool) -> ProgramConfiguration {
    ProgramConfiguration::builder()
        .with_program(WashingProgram::Intensive)
        .with_fill_level(FillLevel::Half)
        .with_tablets_used(tablets)
        .build()
        .unwrap()
}

fn run(rig: &mut MockRig, config: &ProgramConfiguration) -> RunResult {
    let mut washer = DishWasher::new(
        &mut rig.pump,
        &mut rig.engine,
        &mut rig.filter,
        &mut rig.door,
    );
    washer.start(config)
}

#[test]
fn intensive_without_tablets_succeeds() {
    let mut rig = MockRig::new();
    let result = run(&mut rig, &intensive_half(false));
    assert_eq!(result.status(), Status::Success);
    assert_eq!(
        result.run_minutes(),
        WashingProgram::Intensive.duration_minutes()
    );
}

#[test]
fn clean_filter_with_tablets_matches_plain_run() {
    let mut plain = MockRig::new();
    let without = run(&mut plain, &intensive_half(false));

    let mut rig = MockRig::new();
    rig.filter.capacity = 100.0;
    let with = run(&mut rig, &intensive_half(true));

    assert_eq!(with.status(), Status::Success);
    assert_eq!(with.run_minutes(), without.run_minutes());
}

#[test]
fn full_call_order_with_tablets() {
    let mut rig = MockRig::new();
    run(&mut rig, &intensive_half(true));

    assert_eq!(
        rig.calls(),
        vec![
            DeviceCall::DoorClosed,
            DeviceCall::FilterCapacity,
            DeviceCall::DoorLock,
            DeviceCall::Pour(FillLevel::Half),
            DeviceCall::RunProgram(WashingProgram::Intensive.steps().to_vec()),
            DeviceCall::Drain,
            DeviceCall::DoorUnlock,
        ]
    );
}

#[test]
fn call_order_without_tablets_skips_filter() {
    let mut rig = MockRig::new();
    run(&mut rig, &intensive_half(false));

    assert_eq!(
        rig.calls(),
        vec![
            DeviceCall::DoorClosed,
            DeviceCall::DoorLock,
            DeviceCall::Pour(FillLevel::Half),
            DeviceCall::RunProgram(WashingProgram::Intensive.steps().to_vec()),
            DeviceCall::Drain,
            DeviceCall::DoorUnlock,
        ]
    );
    assert_eq!(rig.count(&DeviceCall::FilterCapacity), 0);
}

#[test]
fn engine_receives_requested_program_steps() {
    for program in WashingProgram::ALL {
        let mut rig = MockRig::new();
        let config = ProgramConfiguration::new(program, FillLevel::Full, false);
        let result = run(&mut rig, &config);

        assert_eq!(result, RunResult::success(program.duration_minutes()));
        assert_eq!(
            rig.count(&DeviceCall::RunProgram(program.steps().to_vec())),
            1
        );
        assert_eq!(rig.count(&DeviceCall::Pour(FillLevel::Full)), 1);
    }
}

#[test]
fn washer_reused_for_consecutive_cycles() {
    let mut rig = MockRig::new();
    let mut washer = DishWasher::new(
        &mut rig.pump,
        &mut rig.engine,
        &mut rig.filter,
        &mut rig.door,
    );
    let first = washer.start(&intensive_half(false));
    let second = washer.start(&ProgramConfiguration::new(
        WashingProgram::Rinse,
        FillLevel::Half,
        false,
    ));
    drop(washer);

    assert_eq!(first, RunResult::success(120));
    assert_eq!(second, RunResult::success(20));
    assert_eq!(rig.count(&DeviceCall::DoorLock), 2);
    assert_eq!(rig.count(&DeviceCall::DoorUnlock), 2);
}

#[test]
fn event_sink_sees_start_and_finish() {
    let mut rig = MockRig::new();
    let mut events = EventLog::new();
    let mut washer = DishWasher::with_sink(
        &mut rig.pump,
        &mut rig.engine,
        &mut rig.filter,
        &mut rig.door,
        &mut events,
    );
    washer.start(&intensive_half(true));
    drop(washer);

    assert!(events.events.first().unwrap().starts_with("Started("));
    assert!(events.events.last().unwrap().starts_with("Finished("));
    assert!(
        events
            .events
            .iter()
            .any(|e| e.contains("PhaseChanged") && e.contains("to: Done"))
    );
}
