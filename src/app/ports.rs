//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Dispatcher (domain)
//! ```
//!
//! Driven adapters (GPIO lines, event sinks, display channel, NVS) implement
//! these traits.  The [`Dispatcher`](super::dispatch::Dispatcher) consumes
//! them via generics, so the domain core never touches hardware directly.

use crate::app::events::AppEvent;
use crate::app::rules::OutputId;
use crate::config::SystemConfig;

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the dispatcher commands output pins through this.
pub trait OutputPort {
    /// Set one digital output line.  Must be a non-blocking register write.
    fn set_output(&mut self, output: OutputId, on: bool);

    /// Drive every output low (shutdown path).
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → display layer)
// ───────────────────────────────────────────────────────────────

/// Fire-and-forget mirror of an output's new state onto the visual
/// indicator layer.
///
/// Implementations MUST NOT block the dispatching thread; an update that
/// cannot be delivered is dropped, not retried.
pub trait IndicatorPort {
    fn indicate(&mut self, output: OutputId, visible: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → status sink)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.  Adapters
/// decide where they go (serial log, display status line, both).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Time port (driven adapter: domain ← monotonic clock)
// ───────────────────────────────────────────────────────────────

/// Monotonic time queries for timeout bookkeeping (radio echo waits,
/// ping cadence).
pub trait TimePort {
    /// Milliseconds since boot (monotonic, wraps at `u32::MAX`).
    fn uptime_ms(&self) -> u32;

    /// Microseconds since boot (monotonic).
    fn uptime_us(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists system configuration.
pub trait ConfigPort {
    /// Load configuration from persistent storage.
    /// Returns [`SystemConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<SystemConfig, ConfigError>;

    /// Persist configuration.
    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError>;
}

/// Errors from [`ConfigPort`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// No config found in storage (first boot).
    NotFound,
    /// Stored config failed integrity / deserialization check.
    Corrupted,
    /// Underlying storage is full.
    StorageFull,
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::StorageFull => write!(f, "storage full"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}
