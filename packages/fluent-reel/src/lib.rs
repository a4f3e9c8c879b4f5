//! # Fluent Reel
//!
//! Quote/speech temporal alignment for short narrated videos.
//!
//! A quote is split into display chunks and synthesized to speech. This
//! crate proves that the provider's timing data agrees with the chunking and
//! turns it into frame-accurate video sections:
//!
//! 1. [`segment_characters`] collapses character timing into word marks for
//!    providers that only report per-character start times.
//! 2. [`reconcile`] matches chunk tokens against word marks front to back
//!    and yields one [`ChunkInterval`] per chunk, or an [`AlignmentError`].
//! 3. [`derive_sections`] converts intervals into [`VideoSection`]s with
//!    round-robin background assets.
//!
//! ```ignore
//! let plan = build_render_plan(
//!     &quote,
//!     &TimingSource::Words(parse_speech_marks(&marks_jsonl)?),
//!     &AlignmentConfig::default(),
//!     FrameRate::FPS_30,
//!     &BackgroundRotation::new(clips)?,
//! )?;
//! ```
//!
//! Every function here is pure and synchronous; no global state is kept.

pub mod alignment;
pub mod config;
pub mod export;
pub mod marks;
pub mod reconcile;
pub mod render;
pub mod rules;
pub mod sections;
pub mod segmenter;

pub use fluent_reel_domain::{
    AlignmentError, CharacterTimingStream, ChunkInterval, MismatchReason, Quote, QuoteError,
    SpeechMark, TimedWord, TimestampsGranularity, TimingSource, TimingStreamError, VideoSection,
};

pub use alignment::CharacterAlignment;
pub use config::{AlignmentConfig, ConfigError, DEFAULT_END_DELAY_MS, HyphenHandling};
pub use export::{to_srt, to_vtt};
pub use marks::{MarksError, normalize_marks, parse_speech_marks};
pub use reconcile::reconcile;
pub use render::{RenderPlan, build_render_plan, words_from_source};
pub use rules::WordRules;
pub use sections::{BackgroundRotation, FrameRate, SectionError, derive_sections};
pub use segmenter::segment_characters;

/// Prelude module containing commonly used types.
pub mod prelude {
    pub use crate::{
        AlignmentConfig, AlignmentError, BackgroundRotation, ChunkInterval, FrameRate,
        HyphenHandling, Quote, RenderPlan, SpeechMark, TimedWord, TimingSource, VideoSection,
        build_render_plan, derive_sections, reconcile, segment_characters,
    };
}
