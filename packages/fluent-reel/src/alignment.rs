//! Character alignment as returned by ElevenLabs-style TTS endpoints.
//!
//! Times arrive in fractional seconds with separate start and end arrays.
//! They are validated and converted to a millisecond
//! [`CharacterTimingStream`] before segmentation.

use fluent_reel_domain::{CharacterTimingStream, TimingStreamError};
use serde::{Deserialize, Serialize};

/// Raw `alignment` object from a timestamped synthesis response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterAlignment {
    pub characters: Vec<String>,
    pub character_start_times_seconds: Vec<f32>,
    pub character_end_times_seconds: Vec<f32>,
}

impl CharacterAlignment {
    /// Validate that all arrays agree and the timing is well-formed.
    pub fn validate(&self) -> Result<(), TimingStreamError> {
        self.validate_lengths()?;
        self.validate_timing()?;
        self.validate_characters()?;

        tracing::debug!(
            characters = self.characters.len(),
            duration_s = self.character_end_times_seconds.last().copied().unwrap_or(0.0),
            "alignment validation passed"
        );
        Ok(())
    }

    fn validate_lengths(&self) -> Result<(), TimingStreamError> {
        let starts = self.character_start_times_seconds.len();
        let ends = self.character_end_times_seconds.len();

        if self.characters.len() != starts {
            return Err(TimingStreamError::LengthMismatch {
                characters: self.characters.len(),
                start_times: starts,
            });
        }
        if starts != ends {
            return Err(TimingStreamError::EndTimesMismatch {
                start_times: starts,
                end_times: ends,
            });
        }
        Ok(())
    }

    fn validate_timing(&self) -> Result<(), TimingStreamError> {
        let mut previous_start = 0.0f32;

        for (index, (&start, &end)) in self
            .character_start_times_seconds
            .iter()
            .zip(&self.character_end_times_seconds)
            .enumerate()
        {
            if start < 0.0 {
                return Err(TimingStreamError::NegativeTime {
                    index,
                    seconds: start,
                });
            }
            if end < 0.0 {
                return Err(TimingStreamError::NegativeTime {
                    index,
                    seconds: end,
                });
            }
            if start > end {
                return Err(TimingStreamError::InvertedRange { index, start, end });
            }
            if start < previous_start {
                return Err(TimingStreamError::NonMonotonic {
                    index,
                    start_ms: seconds_to_ms(start),
                    previous_ms: seconds_to_ms(previous_start),
                });
            }
            previous_start = start;
        }
        Ok(())
    }

    fn validate_characters(&self) -> Result<(), TimingStreamError> {
        for (index, character) in self.characters.iter().enumerate() {
            if character.is_empty() {
                return Err(TimingStreamError::EmptyCharacter { index });
            }
            if !character.is_ascii() {
                tracing::warn!(index, character = %character, "non-ASCII character in alignment");
            }
        }
        Ok(())
    }
}

impl TryFrom<&CharacterAlignment> for CharacterTimingStream {
    type Error = TimingStreamError;

    fn try_from(alignment: &CharacterAlignment) -> Result<Self, Self::Error> {
        alignment.validate()?;
        Ok(CharacterTimingStream::new(
            alignment.characters.clone(),
            alignment
                .character_start_times_seconds
                .iter()
                .map(|&s| seconds_to_ms(s))
                .collect(),
        ))
    }
}

fn seconds_to_ms(seconds: f32) -> u64 {
    (f64::from(seconds) * 1000.0).round().max(0.0) as u64
}
