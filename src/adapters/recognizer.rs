//! Console recognizer adapter — the continuous recognition session.
//!
//! The speech engine itself is external; the firmware binds to it at the
//! transcript boundary.  A session thread consumes UTF-8 lines from the
//! serial console (the engine's transcript stream on-device, stdin on the
//! host), interprets each against the compiled [`Grammar`], and publishes
//! tagged [`RecognitionResult`]s onto the recognition channel.  Results are
//! delivered one at a time, serialized by the single session thread.
//!
//! The hand-off is fire-and-forget: a full channel drops the result.

use std::io::BufRead;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use log::{info, warn};

use crate::channels::{RECOGNITION_CHANNEL, RecognitionMsg};
use crate::grammar::Grammar;
use crate::speech::{
    RecognitionResult, RecognitionStatus, RecognizerState, clip,
};

/// Interpret one transcript line against the constraint.
///
/// Out-of-vocabulary lines yield a `Rejected` result with empty semantics
/// rather than an error.
pub fn recognize_line(grammar: &Grammar, line: &str) -> RecognitionResult {
    match grammar.interpret(line) {
        Some(semantics) => RecognitionResult {
            status: RecognitionStatus::Success,
            text: clip(line.trim()),
            semantics,
        },
        None => RecognitionResult::rejected(line.trim()),
    }
}

/// Handle to the running continuous-recognition session.
pub struct ConsoleRecognizer {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl ConsoleRecognizer {
    /// Start the session thread over the process console.
    pub fn start(grammar: Grammar) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let thread = std::thread::Builder::new()
            .name("recognizer".into())
            .spawn(move || session_loop(&grammar, &flag))
            .map_err(|e| warn!("recognizer thread spawn failed: {e}"))
            .ok();

        info!("recognizer session started");
        Self {
            running,
            thread,
        }
    }

    /// Ask the session to stop.  Takes effect after the current line; the
    /// thread is detached rather than joined because console reads block.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        self.thread.take();
        publish(RecognitionMsg::StateChanged(RecognizerState::Idle));
    }
}

fn session_loop(grammar: &Grammar, running: &AtomicBool) {
    publish(RecognitionMsg::StateChanged(RecognizerState::Listening));

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        if !running.load(Ordering::Acquire) {
            break;
        }
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!("recognizer: console read failed: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        publish(RecognitionMsg::StateChanged(RecognizerState::Processing));
        publish(RecognitionMsg::Result(recognize_line(grammar, &line)));
        publish(RecognitionMsg::StateChanged(RecognizerState::Listening));
    }

    publish(RecognitionMsg::StateChanged(RecognizerState::Idle));
}

fn publish(msg: RecognitionMsg) {
    let _ = RECOGNITION_CHANNEL.try_send(msg);
}
