//! Ping/pong exchange engine over any [`RadioPort`].
//!
//! Ping side: stop listening, transmit an 8-byte timestamp, resume
//! listening, and wait up to the response budget for the echo.  Pong side:
//! drain every waiting payload and echo the last one back.  The 1 s ping
//! cadence and the receiver's 20 ms turnaround pause belong to the caller's
//! loop; this engine only does one exchange per call.

use log::debug;

use super::port::RadioPort;
use super::{PAYLOAD_LEN, RETRY_COUNT, RETRY_DELAY, RadioError, Role};
use crate::app::ports::TimePort;

/// One completed ping exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTrip {
    /// Echoed payload (should equal the timestamp sent).
    pub payload: u64,
    /// Measured round-trip time in milliseconds.
    pub rtt_ms: u32,
}

/// Point-to-point exchange engine.
pub struct PingPongLink<R: RadioPort> {
    radio: R,
    role: Role,
    response_timeout_ms: u32,
    pings_sent: u64,
    echoes_seen: u64,
}

impl<R: RadioPort> PingPongLink<R> {
    pub fn new(radio: R, role: Role, response_timeout_ms: u32) -> Self {
        Self {
            radio,
            role,
            response_timeout_ms,
            pings_sent: 0,
            echoes_seen: 0,
        }
    }

    /// Bring the radio up for this role: base config, auto-retry, pipe
    /// pair, then listen.
    pub fn configure(&mut self) {
        self.radio.begin();
        self.radio.set_retries(RETRY_DELAY, RETRY_COUNT);
        self.radio.open_writing_pipe(self.role.writing_pipe());
        self.radio.open_reading_pipe(1, self.role.reading_pipe());
        self.radio.start_listening();
        debug!("radio link configured as {}", self.role.friendly_name());
    }

    /// Transmit `payload` and wait for its echo (ping side).
    pub fn ping(&mut self, payload: u64, clock: &impl TimePort) -> Result<RoundTrip, RadioError> {
        self.pings_sent += 1;

        // Stop listening so we can talk.
        self.radio.stop_listening();
        let acked = self.radio.write(&payload.to_le_bytes());
        self.radio.start_listening();

        if !acked {
            return Err(RadioError::SendFailed);
        }

        // Wait for the echo, or give up after the response budget.
        let start = clock.uptime_ms();
        while !self.radio.available() {
            if clock.uptime_ms().wrapping_sub(start) > self.response_timeout_ms {
                return Err(RadioError::ResponseTimeout);
            }
            core::hint::spin_loop();
        }

        let mut buf = [0u8; PAYLOAD_LEN];
        let _ = self.radio.read(&mut buf);
        self.echoes_seen += 1;
        Ok(RoundTrip {
            payload: u64::from_le_bytes(buf),
            rtt_ms: clock.uptime_ms().wrapping_sub(start),
        })
    }

    /// Drain every waiting payload and echo the last one back (pong side).
    ///
    /// Returns the echoed payload, or `None` when nothing was waiting.
    pub fn pong(&mut self) -> Option<u64> {
        if !self.radio.available() {
            return None;
        }

        // Dump payloads until the FIFO is empty; the last one wins.
        let mut buf = [0u8; PAYLOAD_LEN];
        while !self.radio.read(&mut buf) {}
        self.echoes_seen += 1;

        // Talk, then resume listening for the next packet.
        self.radio.stop_listening();
        let acked = self.radio.write(&buf);
        self.radio.start_listening();
        if !acked {
            debug!("pong echo not acked");
        }

        Some(u64::from_le_bytes(buf))
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn pings_sent(&self) -> u64 {
        self.pings_sent
    }

    pub fn echoes_seen(&self) -> u64 {
        self.echoes_seen
    }
}
