//! Collapse a character timing stream into word-level speech marks.
//!
//! Some providers only report when each character starts. Words are runs
//! of letters (see [`WordRules`]); every other character is a separator and
//! never appears in an emitted value. Each word is timed by its first
//! character and lower-cased.

use fluent_reel_domain::{CharacterTimingStream, SpeechMark};

use crate::rules::WordRules;

/// Segment `stream` into single-timestamp word marks. Never fails.
///
/// Arrays of unequal length are read up to the shorter one.
pub fn segment_characters(stream: &CharacterTimingStream, rules: &WordRules) -> Vec<SpeechMark> {
    let mut words = Vec::new();
    let mut buffer = String::new();
    let mut word_start: Option<u64> = None;

    for (character, start_ms) in stream.iter() {
        let is_letter = !character.is_empty() && character.chars().all(|c| rules.is_letter(c));

        if is_letter {
            word_start.get_or_insert(start_ms);
            buffer.extend(
                character
                    .chars()
                    .filter(|&c| rules.is_emitted(c))
                    .map(|c| c.to_ascii_lowercase()),
            );
        } else if let Some(start) = word_start.take() {
            flush(&mut words, &mut buffer, start);
        }
    }

    if let Some(start) = word_start {
        flush(&mut words, &mut buffer, start);
    }

    tracing::trace!(
        characters = stream.len(),
        words = words.len(),
        "segmented character stream"
    );

    words
}

fn flush(words: &mut Vec<SpeechMark>, buffer: &mut String, start_ms: u64) {
    if !buffer.is_empty() {
        words.push(SpeechMark::instant(std::mem::take(buffer), start_ms));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HyphenHandling;

    fn stream(text: &str, step_ms: u64) -> CharacterTimingStream {
        CharacterTimingStream::from_pairs(
            text.chars()
                .enumerate()
                .map(|(i, c)| (c.to_string(), i as u64 * step_ms)),
        )
    }

    fn values(marks: &[SpeechMark]) -> Vec<(&str, u64)> {
        marks.iter().map(|m| (m.value(), m.start_ms())).collect()
    }

    #[test]
    fn single_word_between_separators() {
        let marks = segment_characters(&stream(" This.", 5), &WordRules::default());
        assert_eq!(values(&marks), [("this", 5)]);
    }

    #[test]
    fn final_letter_is_flushed() {
        let marks = segment_characters(&stream("Go on", 10), &WordRules::default());
        assert_eq!(values(&marks), [("go", 0), ("on", 30)]);
    }

    #[test]
    fn consecutive_separators_collapse() {
        let marks = segment_characters(&stream("  Hi,  there!! ", 10), &WordRules::default());
        assert_eq!(values(&marks), [("hi", 20), ("there", 70)]);
    }

    #[test]
    fn apostrophes_stay_inside_words() {
        let marks = segment_characters(&stream("Don't", 10), &WordRules::default());
        assert_eq!(values(&marks), [("don't", 0)]);
    }

    #[test]
    fn digits_are_separators() {
        let marks = segment_characters(&stream("at 5pm", 10), &WordRules::default());
        assert_eq!(values(&marks), [("at", 0), ("pm", 40)]);
    }

    #[test]
    fn hyphen_follows_configured_handling() {
        let text = "well-known";
        let separate = segment_characters(&stream(text, 10), &WordRules::default());
        assert_eq!(values(&separate), [("well", 0), ("known", 50)]);

        let joined = segment_characters(&stream(text, 10), &WordRules::new(HyphenHandling::Join));
        assert_eq!(values(&joined), [("wellknown", 0)]);
    }

    #[test]
    fn empty_and_separator_only_streams_yield_nothing() {
        assert!(segment_characters(&CharacterTimingStream::default(), &WordRules::default()).is_empty());
        assert!(segment_characters(&stream(" ... ", 10), &WordRules::default()).is_empty());
    }
}
