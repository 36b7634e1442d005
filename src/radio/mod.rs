//! Point-to-point radio link (nRF24L01-class).
//!
//! A bench experiment independent of the voice dispatcher: two nodes on a
//! fixed pair of 40-bit pipe addresses exchange 8-byte timestamp payloads.
//! The ping side transmits a timestamp and measures the round trip; the
//! pong side echoes whatever it drains back.
//!
//! The vendor radio driver (SPI register work, auto-ack/retry mechanics) is
//! an external library; [`RadioPort`] captures the contract this module
//! programs against.

pub mod link;
pub mod port;

pub use link::{PingPongLink, RoundTrip};
pub use port::{NullRadio, RadioPort};

use core::fmt;

use serde::{Deserialize, Serialize};

/// Payload width: one 64-bit timestamp, little-endian.
pub const PAYLOAD_LEN: usize = 8;

/// The fixed 40-bit pipe address pair shared by both nodes.
pub const PIPE_ADDRESSES: [u64; 2] = [0xF0F0_F0F0_E1, 0xF0F0_F0F0_D2];

/// Vendor auto-retry config: delay in 250 µs units, and attempt count.
pub const RETRY_DELAY: u8 = 15;
pub const RETRY_COUNT: u8 = 15;

/// Which side of the exchange this node plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Transmit pings, wait for echoes.
    PingOut,
    /// Drain payloads, echo them back.
    PongBack,
}

impl Role {
    pub fn friendly_name(self) -> &'static str {
        match self {
            Self::PingOut => "Ping out",
            Self::PongBack => "Pong back",
        }
    }

    /// Pipe address this role transmits on.
    pub fn writing_pipe(self) -> u64 {
        match self {
            Self::PingOut => PIPE_ADDRESSES[0],
            Self::PongBack => PIPE_ADDRESSES[1],
        }
    }

    /// Pipe address this role listens on.
    pub fn reading_pipe(self) -> u64 {
        match self {
            Self::PingOut => PIPE_ADDRESSES[1],
            Self::PongBack => PIPE_ADDRESSES[0],
        }
    }
}

/// Errors from the ping side of the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioError {
    /// Transmit failed: the auto-ack never arrived (retries exhausted).
    SendFailed,
    /// No echo within the response timeout budget.
    ResponseTimeout,
}

impl fmt::Display for RadioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SendFailed => write!(f, "send failed (no ack)"),
            Self::ResponseTimeout => write!(f, "response timed out"),
        }
    }
}

impl std::error::Error for RadioError {}
