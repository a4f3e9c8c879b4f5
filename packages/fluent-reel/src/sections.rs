//! Frame-accurate video sections.
//!
//! Each section stays on screen from its chunk's start until the next
//! chunk's start, so pauses between chunks belong to the earlier section.
//! The last section uses its own interval, which already carries the end
//! delay. Rounding is half-up and applied per section; drift across
//! sections is not corrected.

use std::num::NonZeroU32;

use fluent_reel_domain::{ChunkInterval, VideoSection};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("frame rate must be > 0")]
    ZeroFrameRate,
    #[error("at least one background asset is required")]
    NoBackgroundAssets,
}

/// Frames per second of the rendered video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FrameRate(NonZeroU32);

impl FrameRate {
    pub const FPS_30: Self = Self(NonZeroU32::MIN.saturating_add(29));
    pub const FPS_60: Self = Self(NonZeroU32::MIN.saturating_add(59));

    pub fn new(fps: u32) -> Result<Self, SectionError> {
        NonZeroU32::new(fps)
            .map(Self)
            .ok_or(SectionError::ZeroFrameRate)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Round `duration_ms` half-up to whole frames.
    pub fn frames_for(self, duration_ms: u64) -> u32 {
        let scaled = u128::from(duration_ms) * u128::from(self.get());
        u32::try_from((scaled + 500) / 1000).unwrap_or(u32::MAX)
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::FPS_30
    }
}

impl TryFrom<u32> for FrameRate {
    type Error = SectionError;

    fn try_from(fps: u32) -> Result<Self, Self::Error> {
        Self::new(fps)
    }
}

impl From<FrameRate> for u32 {
    fn from(fps: FrameRate) -> Self {
        fps.get()
    }
}

/// Non-empty, ordered list of background clips assigned round-robin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundRotation {
    assets: Vec<String>,
}

impl BackgroundRotation {
    pub fn new<I, S>(assets: I) -> Result<Self, SectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let assets: Vec<String> = assets.into_iter().map(Into::into).collect();
        if assets.is_empty() {
            return Err(SectionError::NoBackgroundAssets);
        }
        Ok(Self { assets })
    }

    /// Shuffle the assets once, upstream of section derivation.
    pub fn shuffled<I, S, R>(assets: I, rng: &mut R) -> Result<Self, SectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        R: Rng + ?Sized,
    {
        let mut rotation = Self::new(assets)?;
        rotation.assets.shuffle(rng);
        Ok(rotation)
    }

    /// Asset for section `index`.
    pub fn asset_for(&self, index: usize) -> &str {
        &self.assets[index % self.assets.len()]
    }

    pub fn assets(&self) -> &[String] {
        &self.assets
    }
}

/// One section per interval, same order.
pub fn derive_sections(
    intervals: &[ChunkInterval],
    fps: FrameRate,
    backgrounds: &BackgroundRotation,
) -> Vec<VideoSection> {
    intervals
        .iter()
        .enumerate()
        .map(|(i, interval)| {
            let duration_ms = match intervals.get(i + 1) {
                Some(next) => next.start.saturating_sub(interval.start),
                None => interval.duration_ms(),
            };
            let duration_in_frames = fps.frames_for(duration_ms);

            tracing::trace!(
                section = i,
                duration_in_frames,
                background = backgrounds.asset_for(i),
                "derived section"
            );

            VideoSection {
                text: interval.value.clone(),
                duration_in_frames,
                background_asset_ref: backgrounds.asset_for(i).to_owned(),
            }
        })
        .collect()
}
