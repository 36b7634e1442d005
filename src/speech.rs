//! Speech-recognition service contract.
//!
//! The recognition engine itself is external to this firmware; this module
//! defines the shapes it delivers.  A continuous recognition session emits
//! one [`RecognitionResult`] per recognized utterance, carrying the raw
//! transcript and a bounded map of semantic tags produced by the grammar's
//! interpretation rules.  All types are fixed-capacity so results can cross
//! the recognition channel without allocation.

// ---------------------------------------------------------------------------
// Bounded string types (channel-crossing)
// ---------------------------------------------------------------------------

/// Raw transcript of one utterance.
pub type Utterance = heapless::String<64>;
/// Semantic tag name (`device`, `target`, `cmd`).
pub type TagName = heapless::String<16>;
/// A single semantic tag value.
pub type TagValue = heapless::String<24>;

/// Copy `s` into a fixed-capacity string, truncating on a char boundary.
pub(crate) fn clip<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Session state and result status
// ---------------------------------------------------------------------------

/// Recognizer session state.  Every change is reported on the recognition
/// channel so the status sink can trace the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognizerState {
    /// Session not started or stopped.
    Idle,
    /// Waiting for speech.
    Listening,
    /// An utterance is being interpreted.
    Processing,
}

/// Whether an utterance matched the grammar constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionStatus {
    /// Grammar match; `semantics` carries the extracted tags.
    Success,
    /// Out-of-vocabulary utterance; `semantics` is empty.
    Rejected,
}

// ---------------------------------------------------------------------------
// Semantic interpretation
// ---------------------------------------------------------------------------

/// One tag slot with its (possibly multiple) values.
#[derive(Debug, Clone, Default)]
pub struct SemanticProperty {
    pub key: TagName,
    pub values: heapless::Vec<TagValue, 2>,
}

/// Bounded tag-name → values map produced by grammar interpretation.
///
/// Consumers read only the **first** value of each tag; extra values and
/// keys past capacity are silently dropped, matching the fire-and-forget
/// discipline of the channel this crosses.
#[derive(Debug, Clone, Default)]
pub struct SemanticMap {
    props: heapless::Vec<SemanticProperty, 4>,
}

impl SemanticMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` under `key`, creating the slot on first use.
    pub fn insert(&mut self, key: &str, value: &str) {
        if let Some(prop) = self.props.iter_mut().find(|p| p.key == key) {
            let _ = prop.values.push(clip(value));
            return;
        }
        let mut prop = SemanticProperty {
            key: clip(key),
            ..Default::default()
        };
        let _ = prop.values.push(clip(value));
        let _ = self.props.push(prop);
    }

    /// First value for `key`, or `""` when the tag is absent.
    pub fn first(&self, key: &str) -> &str {
        self.props
            .iter()
            .find(|p| p.key == key)
            .and_then(|p| p.values.first())
            .map_or("", |v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Recognition result
// ---------------------------------------------------------------------------

/// One recognition-result event from the continuous session.
#[derive(Debug, Clone)]
pub struct RecognitionResult {
    pub status: RecognitionStatus,
    pub text: Utterance,
    pub semantics: SemanticMap,
}

impl RecognitionResult {
    /// An out-of-vocabulary result for `text`.
    pub fn rejected(text: &str) -> Self {
        Self {
            status: RecognitionStatus::Rejected,
            text: clip(text),
            semantics: SemanticMap::new(),
        }
    }
}
