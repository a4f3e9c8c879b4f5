//! Render plan: the section list handed to video composition.

use fluent_reel_domain::{AlignmentError, ChunkInterval, Quote, TimedWord, TimingSource, VideoSection};
use serde::{Deserialize, Serialize};

use crate::config::AlignmentConfig;
use crate::marks::normalize_marks;
use crate::reconcile::reconcile;
use crate::sections::{BackgroundRotation, FrameRate, derive_sections};
use crate::segmenter::segment_characters;

/// Timed sections for one quote, serialized with camelCase keys.
///
/// Audio location and metadata are attached by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub fps: FrameRate,
    pub sections: Vec<VideoSection>,
    /// Sum of the section durations.
    pub duration_in_frames: u64,
    /// Chunk intervals the sections were derived from.
    #[serde(skip)]
    pub intervals: Vec<ChunkInterval>,
}

impl RenderPlan {
    pub fn new(fps: FrameRate, intervals: Vec<ChunkInterval>, sections: Vec<VideoSection>) -> Self {
        let duration_in_frames = sections
            .iter()
            .map(|s| u64::from(s.duration_in_frames))
            .sum();
        Self {
            fps,
            sections,
            duration_in_frames,
            intervals,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Normalize provider timing into words, segmenting characters if needed.
pub fn words_from_source(source: &TimingSource, config: &AlignmentConfig) -> Vec<TimedWord> {
    match source {
        TimingSource::Words(marks) => normalize_marks(marks, config.end_delay_ms),
        TimingSource::Characters(stream) => {
            let marks = segment_characters(stream, &config.word_rules());
            normalize_marks(&marks, config.end_delay_ms)
        }
    }
}

/// Reconcile `source` against `quote` and derive its sections in one pass.
pub fn build_render_plan(
    quote: &Quote,
    source: &TimingSource,
    config: &AlignmentConfig,
    fps: FrameRate,
    backgrounds: &BackgroundRotation,
) -> Result<RenderPlan, AlignmentError> {
    let words = words_from_source(source, config);
    let intervals = reconcile(quote, &words, config)?;
    let sections = derive_sections(&intervals, fps, backgrounds);

    tracing::debug!(
        granularity = %source.granularity(),
        sections = sections.len(),
        fps = fps.get(),
        "built render plan"
    );

    Ok(RenderPlan::new(fps, intervals, sections))
}
