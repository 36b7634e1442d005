//! GPIO output adapter — bridges the wired output pins to the domain port.
//!
//! Owns the three [`OutputLine`] drivers and exposes them through
//! [`OutputPort`].  This is the only module in the system that holds pin
//! state; there are no process-wide pin singletons.

use crate::app::ports::OutputPort;
use crate::app::rules::OutputId;
use crate::drivers::output_line::OutputLine;

/// Concrete adapter that owns every wired output line.
pub struct GpioOutputAdapter {
    lines: [OutputLine; OutputId::COUNT],
}

impl GpioOutputAdapter {
    /// Wire up the board's outputs per `pins.rs`.
    pub fn new() -> Self {
        Self {
            lines: OutputId::ALL.map(|id| OutputLine::new(id.gpio())),
        }
    }

    /// Readback of the last level written to `output`.
    pub fn level(&self, output: OutputId) -> bool {
        self.lines[output.index()].is_high()
    }
}

impl OutputPort for GpioOutputAdapter {
    fn set_output(&mut self, output: OutputId, on: bool) {
        self.lines[output.index()].set(on);
    }

    fn all_off(&mut self) {
        for line in &mut self.lines {
            line.set(false);
        }
    }
}
