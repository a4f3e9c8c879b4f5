//! # Fluent Reel Domain
//!
//! Shared value types for turning a synthesized quote into a timed video
//! script: the quote and its chunks, provider speech marks, per-chunk
//! intervals and the video sections derived from them.
//!
//! Everything here is an immutable value created fresh per invocation.

pub mod alignment_error;
pub mod character_timing;
pub mod chunk_interval;
pub mod quote;
pub mod timestamps;
pub mod video_section;

pub use alignment_error::{AlignmentError, MismatchReason};
pub use character_timing::{CharacterTimingStream, TimingStreamError};
pub use chunk_interval::ChunkInterval;
pub use quote::{Quote, QuoteError};
pub use timestamps::{SpeechMark, TimedWord, TimestampsGranularity, TimingSource};
pub use video_section::VideoSection;

/// Prelude module containing commonly used types.
pub mod prelude {
    pub use crate::{
        AlignmentError, CharacterTimingStream, ChunkInterval, MismatchReason, Quote, QuoteError,
        SpeechMark, TimedWord, TimestampsGranularity, TimingSource, TimingStreamError,
        VideoSection,
    };
}
