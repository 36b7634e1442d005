//! Inter-thread communication channels.
//!
//! Uses `embassy-sync` bounded MPMC channels to bridge the recognizer
//! thread with the synchronous main loop, and the dispatcher with the
//! display layer. Both sides share these static channels without heap
//! allocation.
//!
//! ```text
//! ┌──────────────┐ RecognitionMsg ┌──────────────┐ DisplayMsg ┌─────────────┐
//! │  Recognizer  │───────────────▶│  Main Loop    │──────────▶│ DisplayPanel │
//! │  (thread)    │                │  (dispatch)   │           │ (indicators) │
//! └──────────────┘                └──────────────┘           └─────────────┘
//! ```
//!
//! Every send is `try_send`: a full channel drops the message rather than
//! blocking the producer (fire-and-forget hand-off).

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::app::events::StatusText;
use crate::app::rules::OutputId;
use crate::speech::{RecognitionResult, RecognizerState};

/// Inbound message from the recognition session, delivered to the main loop.
#[derive(Debug, Clone)]
pub enum RecognitionMsg {
    /// A recognized utterance with its semantic tags.
    Result(RecognitionResult),
    /// The session changed state.
    StateChanged(RecognizerState),
}

/// Outbound update from the dispatcher, delivered to the display layer.
#[derive(Debug, Clone)]
pub enum DisplayMsg {
    /// Mirror one output's new state onto its visual indicator.
    Output { output: OutputId, visible: bool },
    /// Replace the status line.
    Status(StatusText),
}

/// Channel depth for recognition (inbound) messages.
const RECOGNITION_DEPTH: usize = 8;

/// Channel depth for display (outbound) messages.
const DISPLAY_DEPTH: usize = 16;

/// Inbound recognition channel: recognizer thread → main loop.
pub static RECOGNITION_CHANNEL: Channel<
    CriticalSectionRawMutex,
    RecognitionMsg,
    RECOGNITION_DEPTH,
> = Channel::new();

/// Outbound display channel: dispatcher → display panel.
pub static DISPLAY_CHANNEL: Channel<CriticalSectionRawMutex, DisplayMsg, DISPLAY_DEPTH> =
    Channel::new();
