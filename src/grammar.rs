//! Grammar constraint — the fixed vocabulary and its tag-extraction rules.
//!
//! The recognition engine is external; what the firmware owns is the
//! declarative grammar asset that restricts recognizable speech and states
//! which tags each phrase produces.  The asset is JSON:
//!
//! ```json
//! { "entries": [
//!     { "phrase": "turn on the red led",
//!       "device": "LED", "target": "RED", "cmd": "ON" }
//! ] }
//! ```
//!
//! A grammar is compiled before the session starts: phrases are normalized
//! (trim, ASCII lowercase, whitespace collapse) and validated.  The
//! compilation result is reported on the status sink before recognition
//! begins, mirroring the engine's own compile step.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::app::tags::{TAG_CMD, TAG_DEVICE, TAG_TARGET};
use crate::speech::SemanticMap;

// ---------------------------------------------------------------------------
// Asset format
// ---------------------------------------------------------------------------

/// One grammar rule: a spoken phrase and the tags it produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarEntry {
    pub phrase: String,
    pub device: String,
    pub target: String,
    pub cmd: String,
}

/// Raw on-disk grammar asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GrammarFile {
    entries: Vec<GrammarEntry>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from grammar loading and compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarError {
    /// Asset could not be read from storage.
    Io,
    /// Asset is not valid JSON for the grammar schema.
    Parse,
    /// Grammar has no entries.
    Empty,
    /// Entry at this index has an empty phrase.
    EmptyPhrase(usize),
    /// Entry at this index repeats an earlier phrase (after normalization).
    DuplicatePhrase(usize),
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "asset read failed"),
            Self::Parse => write!(f, "asset parse failed"),
            Self::Empty => write!(f, "grammar has no entries"),
            Self::EmptyPhrase(i) => write!(f, "entry {i}: empty phrase"),
            Self::DuplicatePhrase(i) => write!(f, "entry {i}: duplicate phrase"),
        }
    }
}

impl std::error::Error for GrammarError {}

// ---------------------------------------------------------------------------
// Compiled grammar
// ---------------------------------------------------------------------------

/// A compiled grammar constraint: normalized phrase → semantic tags.
#[derive(Debug, Clone)]
pub struct Grammar {
    entries: Vec<GrammarEntry>,
}

impl Grammar {
    /// Parse and compile a JSON grammar asset.
    pub fn parse(json: &str) -> Result<Self, GrammarError> {
        let file: GrammarFile = serde_json::from_str(json).map_err(|_| GrammarError::Parse)?;
        Self::compile(file.entries)
    }

    /// Read, parse, and compile a grammar asset from storage.
    pub fn load(path: &str) -> Result<Self, GrammarError> {
        let json = std::fs::read_to_string(path).map_err(|_| GrammarError::Io)?;
        Self::parse(&json)
    }

    /// The built-in demo vocabulary: every wired `(device, target)` pair
    /// plus the (unwired) porch light, each with an on and an off phrase.
    pub fn builtin() -> Self {
        const PHRASES: &[(&str, &str, &str, &str)] = &[
            ("turn on the red led", "LED", "RED", "ON"),
            ("turn off the red led", "LED", "RED", "OFF"),
            ("turn on the green led", "LED", "GREEN", "ON"),
            ("turn off the green led", "LED", "GREEN", "OFF"),
            ("turn on the bedroom light", "LIGHT", "BEDROOM", "ON"),
            ("turn off the bedroom light", "LIGHT", "BEDROOM", "OFF"),
            ("turn on the porch light", "LIGHT", "PORCH", "ON"),
            ("turn off the porch light", "LIGHT", "PORCH", "OFF"),
        ];
        let entries = PHRASES
            .iter()
            .map(|(phrase, device, target, cmd)| GrammarEntry {
                phrase: (*phrase).to_string(),
                device: (*device).to_string(),
                target: (*target).to_string(),
                cmd: (*cmd).to_string(),
            })
            .collect();
        // The table above is already normalized and duplicate-free.
        Self { entries }
    }

    /// Validate entries and normalize their phrases.
    fn compile(mut entries: Vec<GrammarEntry>) -> Result<Self, GrammarError> {
        if entries.is_empty() {
            return Err(GrammarError::Empty);
        }
        for i in 0..entries.len() {
            let normalized = normalize(&entries[i].phrase);
            if normalized.is_empty() {
                return Err(GrammarError::EmptyPhrase(i));
            }
            if entries[..i].iter().any(|e| e.phrase == normalized) {
                return Err(GrammarError::DuplicatePhrase(i));
            }
            entries[i].phrase = normalized;
        }
        Ok(Self { entries })
    }

    /// Number of compiled phrases.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Interpret one transcript line against the constraint.
    ///
    /// Matching is exact on the normalized phrase; tag values are emitted
    /// verbatim (the vocabulary is fixed-case, and the dispatcher compares
    /// case-exactly).
    pub fn interpret(&self, text: &str) -> Option<SemanticMap> {
        let normalized = normalize(text);
        let entry = self.entries.iter().find(|e| e.phrase == normalized)?;
        let mut semantics = SemanticMap::new();
        semantics.insert(TAG_DEVICE, &entry.device);
        semantics.insert(TAG_TARGET, &entry.target);
        semantics.insert(TAG_CMD, &entry.cmd);
        Some(semantics)
    }
}

/// Trim, lowercase (ASCII), and collapse whitespace runs.
fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        for c in word.chars() {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}
