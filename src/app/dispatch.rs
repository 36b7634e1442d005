//! Command dispatcher — the hexagonal core.
//!
//! Given the semantic tags of one recognized utterance, decide which output
//! (if any) to set and to what level.  All I/O flows through port traits
//! injected at call sites, making the entire service testable with mock
//! adapters.
//!
//! ```text
//!  Recognition ──▶ ┌────────────────────────┐ ──▶ OutputPort (one pin max)
//!  channel         │       Dispatcher        │ ──▶ IndicatorPort (mirror)
//!                  │   rule table lookup     │ ──▶ EventSink (status)
//!                  └────────────────────────┘
//! ```
//!
//! Guarantees: at most one pin write per dispatch; unmatched input is a
//! diagnostic, never an error; missing tags degrade to empty strings and
//! fall through to the unknown branches.  The only state carried across
//! calls is each output's last-written level, kept for idempotent
//! re-application and telemetry.

use log::{debug, info};

use super::events::AppEvent;
use super::ports::{EventSink, IndicatorPort, OutputPort};
use super::rules::{self, OutputId, Resolution};
use super::tags::RecognitionTags;
use crate::speech::RecognitionResult;

// ───────────────────────────────────────────────────────────────
// Outcome
// ───────────────────────────────────────────────────────────────

/// What one dispatch call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// One output pin was written to `on`.
    Applied { output: OutputId, on: bool },
    /// The pair is recognized but unwired (porch light); no pin touched.
    Reserved { on: bool },
    /// Device known, target not; no pin touched.
    UnknownTarget,
    /// Device unknown; no pin touched.
    UnknownDevice,
}

impl DispatchOutcome {
    /// The output written by this dispatch, if any.
    pub fn applied_output(self) -> Option<OutputId> {
        match self {
            Self::Applied { output, .. } => Some(output),
            _ => None,
        }
    }

    /// The level written, if any.
    pub fn new_state(self) -> Option<bool> {
        match self {
            Self::Applied { on, .. } => Some(on),
            _ => None,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Dispatcher
// ───────────────────────────────────────────────────────────────

/// The application service: rule-table dispatch from tags to one pin write.
pub struct Dispatcher {
    /// Last-written level per output.
    levels: [bool; OutputId::COUNT],
    dispatch_count: u64,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            levels: [false; OutputId::COUNT],
            dispatch_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the service.  Outputs start low (hw_init drives them there).
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("Dispatcher started ({} outputs wired)", OutputId::COUNT);
    }

    // ── Per-result orchestration ──────────────────────────────

    /// Process one recognition result end to end: trace it, extract the
    /// tags, and dispatch.
    pub fn handle_result(
        &mut self,
        result: &RecognitionResult,
        hw: &mut impl OutputPort,
        indicator: &mut impl IndicatorPort,
        sink: &mut impl EventSink,
    ) -> DispatchOutcome {
        let tags = RecognitionTags::from_semantics(&result.semantics);
        sink.emit(&AppEvent::Recognized {
            status: result.status,
            text: result.text.clone(),
            tags: tags.clone(),
        });
        self.dispatch(&tags, hw, indicator, sink)
    }

    /// Apply the rule table to one tag triple.
    ///
    /// Never raises to the caller; every anomaly is absorbed here and
    /// reported through the sink.
    pub fn dispatch(
        &mut self,
        tags: &RecognitionTags,
        hw: &mut impl OutputPort,
        indicator: &mut impl IndicatorPort,
        sink: &mut impl EventSink,
    ) -> DispatchOutcome {
        self.dispatch_count += 1;
        let on = tags.command().is_on();

        match rules::resolve(&tags.device, &tags.target) {
            Resolution::Bound(output) => {
                hw.set_output(output, on);
                self.levels[output.index()] = on;
                indicator.indicate(output, on);
                sink.emit(&AppEvent::OutputApplied { output, on });
                DispatchOutcome::Applied { output, on }
            }
            Resolution::Reserved(label) => {
                sink.emit(&AppEvent::ReservedTarget { label, on });
                DispatchOutcome::Reserved { on }
            }
            Resolution::UnknownTarget => {
                debug!("dispatch: unknown target '{}'", tags.target);
                sink.emit(&AppEvent::UnknownTarget);
                DispatchOutcome::UnknownTarget
            }
            Resolution::UnknownDevice => {
                debug!("dispatch: unknown device '{}'", tags.device);
                sink.emit(&AppEvent::UnknownDevice);
                DispatchOutcome::UnknownDevice
            }
        }
    }

    /// Drive every output low (session teardown).
    pub fn shutdown(&mut self, hw: &mut impl OutputPort) {
        hw.all_off();
        self.levels = [false; OutputId::COUNT];
    }

    // ── Queries ───────────────────────────────────────────────

    /// Last level written to `output`.
    pub fn output_level(&self, output: OutputId) -> bool {
        self.levels[output.index()]
    }

    /// Total dispatch calls since startup.
    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullHw;
    impl OutputPort for NullHw {
        fn set_output(&mut self, _output: OutputId, _on: bool) {}
        fn all_off(&mut self) {}
    }
    impl IndicatorPort for NullHw {
        fn indicate(&mut self, _output: OutputId, _visible: bool) {}
    }
    impl EventSink for NullHw {
        fn emit(&mut self, _event: &AppEvent) {}
    }

    #[test]
    fn levels_mirror_the_last_write() {
        let mut d = Dispatcher::new();
        let (mut hw, mut ind, mut sink) = (NullHw, NullHw, NullHw);

        let tags = RecognitionTags::new("LED", "GREEN", "ON");
        let outcome = d.dispatch(&tags, &mut hw, &mut ind, &mut sink);
        assert_eq!(outcome.applied_output(), Some(OutputId::GreenLed));
        assert_eq!(outcome.new_state(), Some(true));
        assert!(d.output_level(OutputId::GreenLed));
        assert!(!d.output_level(OutputId::RedLed));

        let tags = RecognitionTags::new("LED", "GREEN", "OFF");
        d.dispatch(&tags, &mut hw, &mut ind, &mut sink);
        assert!(!d.output_level(OutputId::GreenLed));
        assert_eq!(d.dispatch_count(), 2);
    }

    #[test]
    fn unmatched_input_reports_no_output() {
        let mut d = Dispatcher::new();
        let (mut hw, mut ind, mut sink) = (NullHw, NullHw, NullHw);

        let outcome = d.dispatch(
            &RecognitionTags::new("FAN", "", "ON"),
            &mut hw,
            &mut ind,
            &mut sink,
        );
        assert_eq!(outcome, DispatchOutcome::UnknownDevice);
        assert_eq!(outcome.applied_output(), None);
        assert_eq!(outcome.new_state(), None);
    }

    #[test]
    fn shutdown_clears_every_level() {
        let mut d = Dispatcher::new();
        let (mut hw, mut ind, mut sink) = (NullHw, NullHw, NullHw);
        d.dispatch(
            &RecognitionTags::new("LIGHT", "BEDROOM", "ON"),
            &mut hw,
            &mut ind,
            &mut sink,
        );
        d.shutdown(&mut hw);
        for id in OutputId::ALL {
            assert!(!d.output_level(id));
        }
    }
}
