//! Failure to reconcile a quote's chunking with its speech marks.
use std::fmt;

use strum::IntoStaticStr;
use thiserror::Error;

use crate::timestamps::TimedWord;

/// Why reconciliation stopped.
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum MismatchReason {
    /// A chunk token differed from the next mark.
    WordMismatch { expected: String, found: String },
    /// The marks ran out before every chunk token was matched.
    InsufficientMarks,
    /// Every chunk matched but marks were left over.
    LeftoverMarks,
}

impl MismatchReason {
    /// Stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordMismatch { expected, found } => {
                write!(f, "expected {expected:?}, found {found:?}")
            }
            Self::InsufficientMarks => f.write_str("ran out of speech marks"),
            Self::LeftoverMarks => f.write_str("speech marks left over"),
        }
    }
}

/// The quote text and its speech marks disagree.
///
/// Permanent for this input pair; callers typically re-synthesize speech
/// and try again rather than retry the same marks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("speech marks do not match quote ({reason}); {} marks unconsumed", .remaining.len())]
pub struct AlignmentError {
    pub reason: MismatchReason,
    /// Marks not yet consumed when reconciliation stopped.
    pub remaining: Vec<TimedWord>,
    /// Full original quote text.
    pub quote_text: String,
}

impl AlignmentError {
    pub fn new(
        reason: MismatchReason,
        remaining: impl Into<Vec<TimedWord>>,
        quote_text: impl Into<String>,
    ) -> Self {
        Self {
            reason,
            remaining: remaining.into(),
            quote_text: quote_text.into(),
        }
    }
}
