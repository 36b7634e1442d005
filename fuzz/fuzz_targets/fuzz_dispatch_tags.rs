//! Fuzz target: `Dispatcher::dispatch`
//!
//! Splits arbitrary bytes into a (device, target, cmd) triple and asserts
//! the dispatch guarantees hold for any input: never more than one output
//! write, and writes only for table-listed pairs.
//!
//! cargo fuzz run fuzz_dispatch_tags

#![no_main]

use libfuzzer_sys::fuzz_target;
use voxhome::app::dispatch::Dispatcher;
use voxhome::app::events::AppEvent;
use voxhome::app::ports::{EventSink, IndicatorPort, OutputPort};
use voxhome::app::rules::OutputId;
use voxhome::app::tags::RecognitionTags;

#[derive(Default)]
struct CountingPort {
    writes: usize,
}

impl OutputPort for CountingPort {
    fn set_output(&mut self, _output: OutputId, _on: bool) {
        self.writes += 1;
    }

    fn all_off(&mut self) {}
}

impl IndicatorPort for CountingPort {
    fn indicate(&mut self, _output: OutputId, _visible: bool) {}
}

impl EventSink for CountingPort {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    let mut parts = text.splitn(3, ',');
    let device = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("");
    let cmd = parts.next().unwrap_or("");

    let mut dispatcher = Dispatcher::new();
    let mut port = CountingPort::default();
    let mut indicator = CountingPort::default();
    let mut sink = CountingPort::default();

    let tags = RecognitionTags::new(device, target, cmd);
    let outcome = dispatcher.dispatch(&tags, &mut port, &mut indicator, &mut sink);

    assert!(port.writes <= 1, "dispatch must never write more than one pin");
    assert_eq!(
        port.writes == 1,
        outcome.applied_output().is_some(),
        "write count and outcome must agree"
    );
});
