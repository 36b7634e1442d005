//! Unified error types for the VoxHome firmware.
//!
//! A single `Error` enum that every subsystem can convert into, keeping the
//! bring-up path's error handling uniform.  Dispatch itself never errors —
//! unmatched voice input is a diagnostic, not a failure — so this taxonomy
//! only covers initialisation, the grammar asset, and the radio link.

use core::fmt;

use crate::drivers::hw_init::HwInitError;
use crate::grammar::GrammarError;
use crate::radio::RadioError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Grammar asset could not be loaded or compiled.
    Grammar(GrammarError),
    /// Radio link operation failed.
    Radio(RadioError),
    /// Peripheral initialisation failed.
    HwInit(HwInitError),
    /// Configuration is invalid or could not be loaded.
    Config(&'static str),
    /// Other one-shot bring-up failure.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grammar(e) => write!(f, "grammar: {e}"),
            Self::Radio(e) => write!(f, "radio: {e}"),
            Self::HwInit(e) => write!(f, "hw init: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<GrammarError> for Error {
    fn from(e: GrammarError) -> Self {
        Self::Grammar(e)
    }
}

impl From<RadioError> for Error {
    fn from(e: RadioError) -> Self {
        Self::Radio(e)
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::HwInit(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
