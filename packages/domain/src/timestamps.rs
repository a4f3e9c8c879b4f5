//! Speech-mark representations (aligns with Polly & ElevenLabs).
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::character_timing::CharacterTimingStream;

/// Granularity of the timing data a synthesis provider exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TimestampsGranularity {
    /// One mark per spoken word.
    Word,
    /// One start time per character of the input text.
    Character,
}

/// A synthesis engine's claim about when a word was spoken.
///
/// Providers disagree on shape: some report a single `time`, others a
/// `start`/`end` pair. Both are accepted at the boundary and normalized
/// into [`TimedWord`] before reconciliation.
///
/// Variant order matters for untagged deserialization: a mark carrying
/// `time` is always read as [`SpeechMark::Instant`], even when it also has
/// `start`/`end` fields (Polly uses those for byte offsets).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpeechMark {
    /// Single timestamp marking the start of the word.
    Instant {
        value: String,
        time: u64,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
    /// Start/end interval in milliseconds.
    Span {
        value: String,
        start: u64,
        end: u64,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
    },
}

impl SpeechMark {
    /// Word mark with a single start timestamp.
    pub fn instant(value: impl Into<String>, time: u64) -> Self {
        Self::Instant {
            value: value.into(),
            time,
            kind: None,
        }
    }

    /// Word mark with an explicit interval.
    pub fn span(value: impl Into<String>, start: u64, end: u64) -> Self {
        Self::Span {
            value: value.into(),
            start,
            end,
            kind: None,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Instant { value, .. } | Self::Span { value, .. } => value,
        }
    }

    /// Start of the word in milliseconds.
    pub fn start_ms(&self) -> u64 {
        match self {
            Self::Instant { time, .. } => *time,
            Self::Span { start, .. } => *start,
        }
    }

    /// Reported end, if the provider gave one.
    pub fn end_ms(&self) -> Option<u64> {
        match self {
            Self::Instant { .. } => None,
            Self::Span { end, .. } => Some(*end),
        }
    }

    /// Untyped marks count as words; typed ones only when typed `word`.
    pub fn is_word(&self) -> bool {
        let kind = match self {
            Self::Instant { kind, .. } | Self::Span { kind, .. } => kind,
        };
        kind.as_deref().is_none_or(|k| k.eq_ignore_ascii_case("word"))
    }
}

/// Normalized word timing consumed by the reconciler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedWord {
    pub value: String,
    pub start_ms: u64,
    pub end_ms: u64,
}

impl TimedWord {
    pub fn new(value: impl Into<String>, start_ms: u64, end_ms: u64) -> Self {
        Self {
            value: value.into(),
            start_ms,
            end_ms,
        }
    }
}

/// Raw timing output of a speech-generation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "granularity", content = "data", rename_all = "snake_case")]
pub enum TimingSource {
    Words(Vec<SpeechMark>),
    Characters(CharacterTimingStream),
}

impl TimingSource {
    pub fn granularity(&self) -> TimestampsGranularity {
        match self {
            Self::Words(_) => TimestampsGranularity::Word,
            Self::Characters(_) => TimestampsGranularity::Character,
        }
    }
}
