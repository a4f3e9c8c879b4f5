//! Character-granular timing as exposed by providers without word marks.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-character start times, parallel arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterTimingStream {
    /// One entry per character (a string, since providers may send graphemes).
    pub characters: Vec<String>,
    /// Start time of each character in milliseconds.
    pub start_times_ms: Vec<u64>,
}

impl CharacterTimingStream {
    pub fn new(characters: Vec<String>, start_times_ms: Vec<u64>) -> Self {
        Self {
            characters,
            start_times_ms,
        }
    }

    /// Build from any iterator of `(character, start_ms)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let (characters, start_times_ms) = pairs
            .into_iter()
            .map(|(c, t)| (c.into(), t))
            .unzip();
        Self {
            characters,
            start_times_ms,
        }
    }

    pub fn len(&self) -> usize {
        self.characters.len().min(self.start_times_ms.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(character, start_ms)` pairs, stopping at the shorter array.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.characters
            .iter()
            .map(String::as_str)
            .zip(self.start_times_ms.iter().copied())
    }

    /// Check the parallel arrays agree and start times never go backwards.
    pub fn validate(&self) -> Result<(), TimingStreamError> {
        if self.characters.len() != self.start_times_ms.len() {
            return Err(TimingStreamError::LengthMismatch {
                characters: self.characters.len(),
                start_times: self.start_times_ms.len(),
            });
        }

        for (index, character) in self.characters.iter().enumerate() {
            if character.is_empty() {
                return Err(TimingStreamError::EmptyCharacter { index });
            }
        }

        for (index, pair) in self.start_times_ms.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(TimingStreamError::NonMonotonic {
                    index: index + 1,
                    start_ms: pair[1],
                    previous_ms: pair[0],
                });
            }
        }

        Ok(())
    }
}

/// Malformed character timing received from a provider.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimingStreamError {
    #[error("alignment array length mismatch: {characters} characters, {start_times} start times")]
    LengthMismatch {
        characters: usize,
        start_times: usize,
    },
    #[error("alignment array length mismatch: {start_times} start times, {end_times} end times")]
    EndTimesMismatch { start_times: usize, end_times: usize },
    #[error("empty character string at position {index}")]
    EmptyCharacter { index: usize },
    #[error("negative timing value at character {index}: {seconds:.3}s")]
    NegativeTime { index: usize, seconds: f32 },
    #[error("invalid timing order at character {index}: start={start:.3}s > end={end:.3}s")]
    InvertedRange { index: usize, start: f32, end: f32 },
    #[error("non-monotonic timing at character {index}: {start_ms}ms < previous {previous_ms}ms")]
    NonMonotonic {
        index: usize,
        start_ms: u64,
        previous_ms: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{"characters":["h","i"],"startTimesMs":[0,40]}"#;
        let stream: CharacterTimingStream = serde_json::from_str(json).unwrap();
        assert_eq!(stream.len(), 2);
        assert!(stream.validate().is_ok());
    }

    #[test]
    fn rejects_length_mismatch() {
        let stream = CharacterTimingStream::new(vec!["a".into(), "b".into()], vec![0]);
        assert_eq!(
            stream.validate(),
            Err(TimingStreamError::LengthMismatch {
                characters: 2,
                start_times: 1
            })
        );
    }

    #[test]
    fn rejects_decreasing_start_times() {
        let stream = CharacterTimingStream::from_pairs([("a", 10), ("b", 30), ("c", 20)]);
        assert!(matches!(
            stream.validate(),
            Err(TimingStreamError::NonMonotonic { index: 2, .. })
        ));
    }

    #[test]
    fn equal_start_times_are_allowed() {
        let stream = CharacterTimingStream::from_pairs([("a", 10), ("b", 10)]);
        assert!(stream.validate().is_ok());
    }
}
