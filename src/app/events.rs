//! Outbound application events.
//!
//! The [`Dispatcher`](super::dispatch::Dispatcher) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other side
//! decide what to do with them — log to serial, mirror onto the display
//! panel's status line, etc.

use core::fmt::Write as _;

use crate::app::rules::OutputId;
use crate::app::tags::RecognitionTags;
use crate::speech::{RecognitionStatus, RecognizerState, Utterance};

/// One rendered status line (bounded; overlong lines are truncated).
pub type StatusText = heapless::String<96>;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The dispatcher has started.
    Started,

    /// Grammar constraint compiled; carries the phrase count.
    GrammarReady { entries: usize },

    /// The recognizer session changed state.
    RecognizerState(RecognizerState),

    /// A recognition result arrived (pre-dispatch trace).
    Recognized {
        status: RecognitionStatus,
        text: Utterance,
        tags: RecognitionTags,
    },

    /// One output pin was written.
    OutputApplied { output: OutputId, on: bool },

    /// Recognized pair with no wired output (the porch light).
    ReservedTarget { label: &'static str, on: bool },

    /// Tag pair did not resolve: device known, target not.
    UnknownTarget,

    /// Tag pair did not resolve: device unknown.
    UnknownDevice,

    /// Radio ping echoed back; carries the payload and round-trip time.
    RadioRoundTrip { payload: u64, rtt_ms: u32 },

    /// Radio ping got no echo within the timeout budget.
    RadioTimeout,
}

impl AppEvent {
    /// Render the human-readable status line for this event.
    ///
    /// These strings are the status-sink surface; tests assert on them, so
    /// changes here are observable behaviour.
    pub fn status_line(&self) -> StatusText {
        let mut line = StatusText::new();
        let _ = match self {
            Self::Started => write!(line, "Dispatcher started"),
            Self::GrammarReady { entries } => {
                write!(line, "Grammar status: Success ({entries} phrases)")
            }
            Self::RecognizerState(state) => {
                write!(line, "Speech recognizer state: {state:?}")
            }
            Self::Recognized { tags, .. } => write!(
                line,
                "Target: {}, Command: {}, Device: {}",
                tags.target, tags.cmd, tags.device
            ),
            Self::OutputApplied { output, on } => {
                write!(line, "{} {}", output.label(), on_off(*on))
            }
            Self::ReservedTarget { label, on } => {
                write!(line, "{} {}", label, on_off(*on))
            }
            Self::UnknownTarget => write!(line, "Unknown Target"),
            Self::UnknownDevice => write!(line, "Unknown Device"),
            Self::RadioRoundTrip { payload, rtt_ms } => {
                write!(line, "Radio echo {payload} round-trip {rtt_ms} ms")
            }
            Self::RadioTimeout => write!(line, "Radio response timed out"),
        };
        line
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        crate::app::tags::STATE_ON
    } else {
        crate::app::tags::STATE_OFF
    }
}
