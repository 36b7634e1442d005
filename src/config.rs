//! System configuration parameters
//!
//! All tunable parameters for the VoxHome system.
//! Values can be overridden via NVS (non-volatile storage).

use serde::{Deserialize, Serialize};

use crate::radio::Role;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Grammar ---
    /// Path of the grammar asset on the storage partition.
    /// `None` selects the built-in demo vocabulary.
    pub grammar_file: Option<heapless::String<64>>,

    // --- Event loop ---
    /// Main-loop poll interval (milliseconds).
    pub loop_poll_interval_ms: u32,

    // --- Radio link ---
    /// Whether the point-to-point radio experiment is brought up at boot.
    pub radio_enabled: bool,
    /// Which side of the ping/pong exchange this node plays.
    pub radio_role: Role,
    /// Echo wait budget after a ping (milliseconds).
    pub radio_response_timeout_ms: u32,
    /// Pause between pings (milliseconds).
    pub radio_ping_interval_ms: u32,
    /// Receiver turnaround pause between pong services (milliseconds).
    pub radio_turnaround_delay_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Grammar
            grammar_file: None,

            // Event loop
            loop_poll_interval_ms: 10,

            // Radio — off by default; the link is a bench experiment.
            radio_enabled: false,
            radio_role: Role::PingOut,
            radio_response_timeout_ms: 200,
            radio_ping_interval_ms: 1000,
            radio_turnaround_delay_ms: 20,
        }
    }
}
