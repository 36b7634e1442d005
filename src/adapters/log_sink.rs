//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing each event's status line to the
//! serial log (UART / USB-CDC in production).  The display adapter mirrors
//! the same lines onto the panel through the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        let line = event.status_line();
        match event {
            AppEvent::UnknownTarget | AppEvent::UnknownDevice | AppEvent::RadioTimeout => {
                warn!("{}", line);
            }
            _ => info!("{}", line),
        }
    }
}
