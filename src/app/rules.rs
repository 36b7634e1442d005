//! Declarative dispatch rule table.
//!
//! Maps a `(device, target)` tag pair to a hardware output binding.  The
//! rule set is a flat table rather than nested conditionals so extending
//! the vocabulary is one row, not another branch.
//!
//! Resolution order: device membership is checked before the target, the
//! first matching row wins, and every comparison is case-exact (the grammar
//! emits fixed-case tag values).

use crate::pins;

/// LED Device
pub const DEVICE_LED: &str = "LED";
/// Light Device
pub const DEVICE_LIGHT: &str = "LIGHT";

/// Red Led
pub const TARGET_RED: &str = "RED";
/// Green Led
pub const TARGET_GREEN: &str = "GREEN";
/// Bedroom
pub const TARGET_BEDROOM: &str = "BEDROOM";
/// Porch
pub const TARGET_PORCH: &str = "PORCH";

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// The three wired hardware outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OutputId {
    RedLed = 0,
    GreenLed = 1,
    BedroomLight = 2,
}

impl OutputId {
    /// Total number of wired outputs — used to size state arrays.
    pub const COUNT: usize = 3;

    pub const ALL: [Self; Self::COUNT] = [Self::RedLed, Self::GreenLed, Self::BedroomLight];

    pub fn index(self) -> usize {
        self as usize
    }

    /// GPIO line this output drives.
    pub fn gpio(self) -> i32 {
        match self {
            Self::RedLed => pins::RED_LED_GPIO,
            Self::GreenLed => pins::GREEN_LED_GPIO,
            Self::BedroomLight => pins::BEDROOM_LIGHT_GPIO,
        }
    }

    /// Status-line name for this output.
    pub fn label(self) -> &'static str {
        match self {
            Self::RedLed => "RED LED",
            Self::GreenLed => "GREEN LED",
            Self::BedroomLight => "BEDROOM LIGHT",
        }
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// What a rule row binds its `(device, target)` pair to.
#[derive(Debug, Clone, Copy)]
enum Binding {
    /// A wired output.
    Output(OutputId),
    /// Recognized pair with no wired output yet; carries the status label.
    Reserved(&'static str),
}

/// The dispatch rule set.
const RULES: &[(&str, &str, Binding)] = &[
    (DEVICE_LED, TARGET_RED, Binding::Output(OutputId::RedLed)),
    (DEVICE_LED, TARGET_GREEN, Binding::Output(OutputId::GreenLed)),
    (
        DEVICE_LIGHT,
        TARGET_BEDROOM,
        Binding::Output(OutputId::BedroomLight),
    ),
    // Porch light: in the grammar, not on the board. Deliberate no-op until
    // the relay is wired.
    (DEVICE_LIGHT, TARGET_PORCH, Binding::Reserved("PORCH LIGHT")),
];

/// Outcome of looking up a `(device, target)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Pair maps to a wired output.
    Bound(OutputId),
    /// Pair is in the vocabulary but has no wired output (porch light).
    Reserved(&'static str),
    /// Device is known, target is not.
    UnknownTarget,
    /// Device is not in the vocabulary.
    UnknownDevice,
}

/// Resolve a tag pair against the rule table.
pub fn resolve(device: &str, target: &str) -> Resolution {
    let mut device_known = false;
    for (d, t, binding) in RULES {
        if *d != device {
            continue;
        }
        device_known = true;
        if *t == target {
            return match binding {
                Binding::Output(id) => Resolution::Bound(*id),
                Binding::Reserved(label) => Resolution::Reserved(*label),
            };
        }
    }
    if device_known {
        Resolution::UnknownTarget
    } else {
        Resolution::UnknownDevice
    }
}
