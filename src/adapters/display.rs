//! Display-layer adapters: channel producers plus the panel consumer.
//!
//! The dispatcher runs on the recognition-consumer thread; the display
//! surface is owned elsewhere.  Updates therefore cross the bounded
//! [`DISPLAY_CHANNEL`](crate::channels::DISPLAY_CHANNEL) as fire-and-forget
//! messages — a full channel drops the update rather than blocking a
//! dispatch.

use crate::app::events::{AppEvent, StatusText};
use crate::app::ports::{EventSink, IndicatorPort};
use crate::app::rules::OutputId;
use crate::channels::{DISPLAY_CHANNEL, DisplayMsg};

// ───────────────────────────────────────────────────────────────
// Producers (dispatcher side)
// ───────────────────────────────────────────────────────────────

/// [`IndicatorPort`] adapter publishing output-state mirrors.
pub struct ChannelIndicator;

impl ChannelIndicator {
    pub fn new() -> Self {
        Self
    }
}

impl IndicatorPort for ChannelIndicator {
    fn indicate(&mut self, output: OutputId, visible: bool) {
        let _ = DISPLAY_CHANNEL.try_send(DisplayMsg::Output { output, visible });
    }
}

/// [`EventSink`] adapter publishing rendered status lines.
pub struct ChannelStatusSink;

impl ChannelStatusSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for ChannelStatusSink {
    fn emit(&mut self, event: &AppEvent) {
        let _ = DISPLAY_CHANNEL.try_send(DisplayMsg::Status(event.status_line()));
    }
}

// ───────────────────────────────────────────────────────────────
// Consumer (presentation side)
// ───────────────────────────────────────────────────────────────

/// The presentation-side model: one visual indicator per wired output and
/// the current status line.  Drained by whichever loop owns the surface.
pub struct DisplayPanel {
    visible: [bool; OutputId::COUNT],
    status: StatusText,
}

impl DisplayPanel {
    pub fn new() -> Self {
        Self {
            visible: [false; OutputId::COUNT],
            status: StatusText::new(),
        }
    }

    /// Drain every pending display message.  Returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = DISPLAY_CHANNEL.try_receive() {
            self.apply(&msg);
            applied += 1;
        }
        applied
    }

    /// Apply one display message to the panel model.
    pub fn apply(&mut self, msg: &DisplayMsg) {
        match msg {
            DisplayMsg::Output { output, visible } => {
                self.visible[output.index()] = *visible;
            }
            DisplayMsg::Status(line) => {
                self.status = line.clone();
            }
        }
    }

    /// Whether the indicator for `output` is currently shown.
    pub fn is_visible(&self, output: OutputId) -> bool {
        self.visible[output.index()]
    }

    /// The current status line.
    pub fn status(&self) -> &str {
        self.status.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_applies_output_and_status_messages() {
        let mut panel = DisplayPanel::new();
        panel.apply(&DisplayMsg::Output {
            output: OutputId::RedLed,
            visible: true,
        });
        panel.apply(&DisplayMsg::Status(
            AppEvent::UnknownDevice.status_line(),
        ));
        assert!(panel.is_visible(OutputId::RedLed));
        assert!(!panel.is_visible(OutputId::GreenLed));
        assert_eq!(panel.status(), "Unknown Device");

        panel.apply(&DisplayMsg::Output {
            output: OutputId::RedLed,
            visible: false,
        });
        assert!(!panel.is_visible(OutputId::RedLed));
    }
}
