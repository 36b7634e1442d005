//! Semantic tags of one recognized utterance.
//!
//! The grammar's interpretation rules produce up to three named slots per
//! result: `device`, `target`, `cmd`.  A missing slot degrades to the empty
//! string — never an error — and falls through to the dispatcher's unknown
//! branches.

use crate::speech::{SemanticMap, TagValue, clip};

/// Tag TARGET
pub const TAG_TARGET: &str = "target";
/// Tag CMD
pub const TAG_CMD: &str = "cmd";
/// Tag DEVICE
pub const TAG_DEVICE: &str = "device";

/// Spoken command word that switches an output on.
pub const STATE_ON: &str = "ON";
/// Spoken command word that switches an output off.
pub const STATE_OFF: &str = "OFF";

/// The `(device, target, cmd)` triple extracted from a recognition result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecognitionTags {
    pub device: TagValue,
    pub target: TagValue,
    pub cmd: TagValue,
}

impl RecognitionTags {
    pub fn new(device: &str, target: &str, cmd: &str) -> Self {
        Self {
            device: clip(device),
            target: clip(target),
            cmd: clip(cmd),
        }
    }

    /// Read the first value of each tag; absent tags default to `""`.
    pub fn from_semantics(semantics: &SemanticMap) -> Self {
        Self::new(
            semantics.first(TAG_DEVICE),
            semantics.first(TAG_TARGET),
            semantics.first(TAG_CMD),
        )
    }

    /// The on/off command this utterance carries.
    ///
    /// `On` iff the cmd slot is exactly [`STATE_ON`] — comparison is
    /// case-exact, matching the grammar's fixed-case vocabulary.
    pub fn command(&self) -> Command {
        if self.cmd.as_str() == STATE_ON {
            Command::On
        } else {
            Command::Off
        }
    }
}

/// Derived on/off value of the `cmd` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    On,
    Off,
}

impl Command {
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// Status-line suffix ("ON" / "OFF").
    pub fn label(self) -> &'static str {
        match self {
            Self::On => STATE_ON,
            Self::Off => STATE_OFF,
        }
    }
}
