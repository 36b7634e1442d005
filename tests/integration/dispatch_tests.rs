//! Integration tests for the recognition → dispatch → output pipeline.
//!
//! These run on the host (x86_64) and verify the full chain from a
//! transcript line down to a single pin write, with no real hardware.

use crate::mock_hw::{MockOutputs, OutputCall, RecordingIndicator, RecordingSink};

use voxhome::adapters::recognizer::recognize_line;
use voxhome::app::dispatch::{DispatchOutcome, Dispatcher};
use voxhome::app::rules::OutputId;
use voxhome::app::tags::RecognitionTags;
use voxhome::grammar::Grammar;

fn make_rig() -> (Dispatcher, MockOutputs, RecordingIndicator, RecordingSink) {
    let mut d = Dispatcher::new();
    let mut sink = RecordingSink::new();
    d.start(&mut sink);
    (d, MockOutputs::new(), RecordingIndicator::new(), sink)
}

fn dispatch(
    rig: &mut (Dispatcher, MockOutputs, RecordingIndicator, RecordingSink),
    device: &str,
    target: &str,
    cmd: &str,
) -> DispatchOutcome {
    let tags = RecognitionTags::new(device, target, cmd);
    rig.0.dispatch(&tags, &mut rig.1, &mut rig.2, &mut rig.3)
}

// ── Bound pairs: exactly one output is written ───────────────

#[test]
fn red_led_on_sets_exactly_the_red_output() {
    let mut rig = make_rig();
    let outcome = dispatch(&mut rig, "LED", "RED", "ON");

    assert_eq!(outcome.applied_output(), Some(OutputId::RedLed));
    assert_eq!(outcome.new_state(), Some(true));
    assert_eq!(
        rig.1.calls,
        vec![OutputCall::Set {
            output: OutputId::RedLed,
            on: true
        }]
    );
    assert!(!rig.1.level(OutputId::GreenLed));
    assert!(!rig.1.level(OutputId::BedroomLight));
    // The indicator mirrors the write, and the status line reports it.
    assert_eq!(rig.2.updates, vec![(OutputId::RedLed, true)]);
    assert!(rig.3.contains_line("RED LED ON"));
}

#[test]
fn green_led_tracks_the_cmd_tag() {
    let mut rig = make_rig();
    dispatch(&mut rig, "LED", "GREEN", "ON");
    assert!(rig.1.level(OutputId::GreenLed));

    dispatch(&mut rig, "LED", "GREEN", "OFF");
    assert!(!rig.1.level(OutputId::GreenLed));
    assert_eq!(rig.1.writes_to(OutputId::GreenLed), 2);
    assert_eq!(rig.1.write_count(), 2, "no other output was touched");
}

#[test]
fn bedroom_light_off_writes_low() {
    let mut rig = make_rig();
    let outcome = dispatch(&mut rig, "LIGHT", "BEDROOM", "OFF");

    assert_eq!(outcome.applied_output(), Some(OutputId::BedroomLight));
    assert_eq!(outcome.new_state(), Some(false));
    assert!(!rig.1.level(OutputId::BedroomLight));
    assert!(rig.3.contains_line("BEDROOM LIGHT OFF"));
}

// ── Porch light: recognized, unwired, no-op ──────────────────

#[test]
fn porch_light_never_mutates_an_output() {
    let mut rig = make_rig();
    for cmd in ["ON", "OFF", ""] {
        let outcome = dispatch(&mut rig, "LIGHT", "PORCH", cmd);
        assert_eq!(outcome, DispatchOutcome::Reserved { on: cmd == "ON" });
        assert_eq!(outcome.applied_output(), None);
    }
    assert_eq!(rig.1.write_count(), 0);
    assert!(rig.2.updates.is_empty());
    assert!(rig.3.contains_line("PORCH LIGHT ON"));
    assert!(rig.3.contains_line("PORCH LIGHT OFF"));
}

// ── Unknown pairs: diagnostics only ──────────────────────────

#[test]
fn unknown_device_is_a_diagnostic_not_an_error() {
    let mut rig = make_rig();
    let outcome = dispatch(&mut rig, "FAN", "", "ON");

    assert_eq!(outcome, DispatchOutcome::UnknownDevice);
    assert_eq!(rig.1.write_count(), 0);
    assert!(rig.3.contains_line("Unknown Device"));
}

#[test]
fn known_device_with_unknown_target_reports_unknown_target() {
    let mut rig = make_rig();
    assert_eq!(
        dispatch(&mut rig, "LED", "BLUE", "ON"),
        DispatchOutcome::UnknownTarget
    );
    assert_eq!(
        dispatch(&mut rig, "LIGHT", "GARAGE", "OFF"),
        DispatchOutcome::UnknownTarget
    );
    assert_eq!(rig.1.write_count(), 0);
    assert!(rig.3.contains_line("Unknown Target"));
}

#[test]
fn matching_is_case_exact_device_before_target() {
    let mut rig = make_rig();
    // Lowercase device falls out at the device check, not the target check.
    assert_eq!(
        dispatch(&mut rig, "led", "RED", "ON"),
        DispatchOutcome::UnknownDevice
    );
    // Lowercase cmd still resolves the pair but reads as OFF.
    let outcome = dispatch(&mut rig, "LED", "RED", "on");
    assert_eq!(outcome.new_state(), Some(false));
}

#[test]
fn missing_tags_fall_through_to_unknown_device() {
    let mut rig = make_rig();
    let tags = RecognitionTags::default();
    let outcome = rig.0.dispatch(&tags, &mut rig.1, &mut rig.2, &mut rig.3);
    assert_eq!(outcome, DispatchOutcome::UnknownDevice);
    assert_eq!(rig.1.write_count(), 0);
}

// ── Idempotence ──────────────────────────────────────────────

#[test]
fn dispatching_the_same_triple_twice_matches_once() {
    let mut once = make_rig();
    dispatch(&mut once, "LIGHT", "BEDROOM", "ON");

    let mut twice = make_rig();
    dispatch(&mut twice, "LIGHT", "BEDROOM", "ON");
    dispatch(&mut twice, "LIGHT", "BEDROOM", "ON");

    for id in OutputId::ALL {
        assert_eq!(once.1.level(id), twice.1.level(id));
        assert_eq!(once.0.output_level(id), twice.0.output_level(id));
    }
}

// ── Full pipeline: transcript → grammar → dispatch ───────────

#[test]
fn transcript_line_drives_the_bedroom_light() {
    let grammar = Grammar::builtin();
    let mut rig = make_rig();

    let result = recognize_line(&grammar, "turn on the bedroom light");
    let outcome = rig
        .0
        .handle_result(&result, &mut rig.1, &mut rig.2, &mut rig.3);

    assert_eq!(outcome.applied_output(), Some(OutputId::BedroomLight));
    assert!(rig.1.level(OutputId::BedroomLight));
    assert!(
        rig.3
            .contains_line("Target: BEDROOM, Command: ON, Device: LIGHT"),
        "the pre-dispatch trace line must be emitted"
    );
}

#[test]
fn rejected_transcript_touches_nothing() {
    let grammar = Grammar::builtin();
    let mut rig = make_rig();

    let result = recognize_line(&grammar, "make me a sandwich");
    let outcome = rig
        .0
        .handle_result(&result, &mut rig.1, &mut rig.2, &mut rig.3);

    assert_eq!(outcome, DispatchOutcome::UnknownDevice);
    assert_eq!(rig.1.write_count(), 0);
    assert!(rig.3.contains_line("Unknown Device"));
}

#[test]
fn multi_value_tags_use_the_first_value_only() {
    let mut semantics = voxhome::speech::SemanticMap::new();
    semantics.insert("device", "LED");
    semantics.insert("device", "LIGHT");
    semantics.insert("target", "GREEN");
    semantics.insert("cmd", "ON");

    let tags = RecognitionTags::from_semantics(&semantics);
    let mut rig = make_rig();
    let outcome = rig.0.dispatch(&tags, &mut rig.1, &mut rig.2, &mut rig.3);
    assert_eq!(outcome.applied_output(), Some(OutputId::GreenLed));
}

// ── Shutdown path ────────────────────────────────────────────

#[test]
fn shutdown_drives_every_output_low() {
    let mut rig = make_rig();
    dispatch(&mut rig, "LED", "RED", "ON");
    dispatch(&mut rig, "LIGHT", "BEDROOM", "ON");

    rig.0.shutdown(&mut rig.1);
    assert_eq!(rig.1.calls.last(), Some(&OutputCall::AllOff));
    for id in OutputId::ALL {
        assert!(!rig.1.level(id));
    }
}
