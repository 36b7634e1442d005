//! Mock hardware adapters for integration tests.
//!
//! Records every output write, indicator update, and emitted event so
//! tests can assert on the full dispatch history without touching real
//! GPIO registers.

use voxhome::app::events::AppEvent;
use voxhome::app::ports::{EventSink, IndicatorPort, OutputPort};
use voxhome::app::rules::OutputId;

// ── Output call record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCall {
    Set { output: OutputId, on: bool },
    AllOff,
}

// ── MockOutputs ───────────────────────────────────────────────

pub struct MockOutputs {
    pub calls: Vec<OutputCall>,
    levels: [bool; OutputId::COUNT],
}

#[allow(dead_code)]
impl MockOutputs {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            levels: [false; OutputId::COUNT],
        }
    }

    /// Current level of one output (after replaying every call).
    pub fn level(&self, output: OutputId) -> bool {
        self.levels[output.index()]
    }

    /// Number of `Set` calls that touched `output`.
    pub fn writes_to(&self, output: OutputId) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, OutputCall::Set { output: o, .. } if *o == output))
            .count()
    }

    /// Total write calls of any kind.
    pub fn write_count(&self) -> usize {
        self.calls.len()
    }
}

impl Default for MockOutputs {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort for MockOutputs {
    fn set_output(&mut self, output: OutputId, on: bool) {
        self.calls.push(OutputCall::Set { output, on });
        self.levels[output.index()] = on;
    }

    fn all_off(&mut self) {
        self.calls.push(OutputCall::AllOff);
        self.levels = [false; OutputId::COUNT];
    }
}

// ── RecordingIndicator ────────────────────────────────────────

#[derive(Default)]
pub struct RecordingIndicator {
    pub updates: Vec<(OutputId, bool)>,
}

#[allow(dead_code)]
impl RecordingIndicator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IndicatorPort for RecordingIndicator {
    fn indicate(&mut self, output: OutputId, visible: bool) {
        self.updates.push((output, visible));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered status lines, in emission order.
    pub fn status_lines(&self) -> Vec<String> {
        self.events
            .iter()
            .map(|e| e.status_line().as_str().to_string())
            .collect()
    }

    pub fn contains_line(&self, line: &str) -> bool {
        self.events.iter().any(|e| e.status_line().as_str() == line)
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
