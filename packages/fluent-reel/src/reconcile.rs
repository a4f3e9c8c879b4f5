//! Chunk reconciliation.
//!
//! Proves that a quote's chunking agrees with the words a synthesis engine
//! reports having spoken, and derives the interval each chunk is on air.
//! Marks are consumed strictly front to back through a cursor over the
//! input slice; nothing is reordered or read twice.

use fluent_reel_domain::{AlignmentError, ChunkInterval, MismatchReason, Quote, TimedWord};
use tracing::{debug, trace, warn};

use crate::config::AlignmentConfig;

/// Match every chunk token against `words` and compute chunk intervals.
///
/// * The first chunk always starts at `0`.
/// * Every other chunk starts at its first word.
/// * A chunk ends where the next chunk's first word starts; the last chunk
///   ends `end_delay_ms` after its final word starts.
///
/// Any token/mark disagreement, a shortage of marks, or marks left over
/// after the last chunk fails the whole reconciliation.
pub fn reconcile(
    quote: &Quote,
    words: &[TimedWord],
    config: &AlignmentConfig,
) -> Result<Vec<ChunkInterval>, AlignmentError> {
    let rules = config.word_rules();
    let fail = |reason: MismatchReason, cursor: usize| {
        let err = AlignmentError::new(reason, &words[cursor..], quote.text.as_str());
        warn!(
            reason = err.reason.kind(),
            remaining = err.remaining.len(),
            quote = %quote.text,
            "speech marks do not align with quote"
        );
        err
    };

    let mut intervals: Vec<ChunkInterval> = Vec::with_capacity(quote.chunks.len());
    let mut cursor = 0;
    let mut last_spoken: Option<&TimedWord> = None;

    for (index, chunk) in quote.chunks.iter().enumerate() {
        let first = cursor;

        for token in rules.tokenize(chunk) {
            let Some(word) = words.get(cursor) else {
                return Err(fail(MismatchReason::InsufficientMarks, cursor));
            };
            if !token.eq_ignore_ascii_case(&word.value) {
                return Err(fail(
                    MismatchReason::WordMismatch {
                        expected: token,
                        found: word.value.clone(),
                    },
                    cursor,
                ));
            }
            last_spoken = Some(word);
            cursor += 1;
        }

        let start = if index == 0 {
            0
        } else {
            words
                .get(first)
                .map(|w| w.start_ms)
                .or_else(|| intervals.last().map(|prev| prev.end))
                .unwrap_or(0)
        };

        let is_last = index + 1 == quote.chunks.len();
        let end = match words.get(cursor) {
            Some(next) if !is_last => next.start_ms,
            _ => tail_end(last_spoken, start, config.end_delay_ms),
        };

        trace!(chunk = %chunk, start, end, "aligned chunk");
        intervals.push(ChunkInterval::new(chunk.as_str(), start, end.max(start)));
    }

    if cursor < words.len() {
        return Err(fail(MismatchReason::LeftoverMarks, cursor));
    }

    debug!(
        chunks = intervals.len(),
        marks = words.len(),
        end_ms = intervals.last().map(|i| i.end).unwrap_or(0),
        "reconciled speech marks with quote"
    );

    Ok(intervals)
}

fn tail_end(last_spoken: Option<&TimedWord>, start: u64, end_delay_ms: u64) -> u64 {
    match last_spoken {
        Some(word) => word.start_ms.saturating_add(end_delay_ms),
        None => start.saturating_add(end_delay_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HyphenHandling;

    fn words(marks: &[(&str, u64)]) -> Vec<TimedWord> {
        marks
            .iter()
            .map(|&(value, start)| TimedWord::new(value, start, start))
            .collect()
    }

    fn config() -> AlignmentConfig {
        AlignmentConfig::default().with_end_delay_ms(1000)
    }

    #[test]
    fn intervals_follow_next_chunk_start() {
        let quote = Quote::from_chunks(["Hello there,", "general Kenobi."]);
        let marks = words(&[("hello", 120), ("there", 400), ("general", 900), ("kenobi", 1300)]);

        let intervals = reconcile(&quote, &marks, &config()).unwrap();

        assert_eq!(
            intervals,
            [
                ChunkInterval::new("Hello there,", 0, 900),
                ChunkInterval::new("general Kenobi.", 900, 2300),
            ]
        );
    }

    #[test]
    fn single_chunk_brackets_its_words() {
        let quote = Quote::from_chunks(["It's five o'clock somewhere."]);
        let marks = words(&[("it's", 50), ("five", 200), ("o'clock", 500), ("somewhere", 900)]);

        let intervals = reconcile(&quote, &marks, &config()).unwrap();

        assert_eq!(intervals, [ChunkInterval::new("It's five o'clock somewhere.", 0, 1900)]);
    }

    #[test]
    fn matching_ignores_case() {
        let quote = Quote::from_chunks(["hello WORLD"]);
        let marks = words(&[("Hello", 0), ("world", 300)]);
        assert!(reconcile(&quote, &marks, &config()).is_ok());
    }

    #[test]
    fn mismatch_reports_remaining_marks() {
        let quote = Quote::from_chunks(["one two", "three"]);
        let marks = words(&[("one", 0), ("too", 200), ("three", 400)]);

        let err = reconcile(&quote, &marks, &config()).unwrap_err();

        assert_eq!(
            err.reason,
            MismatchReason::WordMismatch {
                expected: "two".into(),
                found: "too".into()
            }
        );
        assert_eq!(err.remaining, words(&[("too", 200), ("three", 400)]));
        assert_eq!(err.quote_text, "one two three");
    }

    #[test]
    fn too_few_marks_fails() {
        let quote = Quote::from_chunks(["one two", "three"]);
        let marks = words(&[("one", 0), ("two", 200)]);

        let err = reconcile(&quote, &marks, &config()).unwrap_err();

        assert_eq!(err.reason, MismatchReason::InsufficientMarks);
        assert!(err.remaining.is_empty());
    }

    #[test]
    fn leftover_marks_fail() {
        let quote = Quote::from_chunks(["one", "two"]);
        let marks = words(&[("one", 0), ("two", 200), ("three", 400)]);

        let err = reconcile(&quote, &marks, &config()).unwrap_err();

        assert_eq!(err.reason, MismatchReason::LeftoverMarks);
        assert_eq!(err.remaining, words(&[("three", 400)]));
    }

    #[test]
    fn hyphen_handling_changes_expected_tokens() {
        let quote = Quote::from_chunks(["A well-known fact."]);
        let split = words(&[("a", 0), ("well", 100), ("known", 300), ("fact", 500)]);
        let joined = words(&[("a", 0), ("wellknown", 100), ("fact", 500)]);

        assert!(reconcile(&quote, &split, &config()).is_ok());
        assert!(reconcile(&quote, &joined, &config()).is_err());

        let join = config().with_hyphens(HyphenHandling::Join);
        assert!(reconcile(&quote, &joined, &join).is_ok());
        assert!(reconcile(&quote, &split, &join).is_err());
    }

    #[test]
    fn last_chunk_ends_end_delay_after_final_word_start() {
        let quote = Quote::from_chunks(["hello", "slow"]);
        let marks = [TimedWord::new("hello", 0, 300), TimedWord::new("slow", 400, 2900)];
        let intervals = reconcile(&quote, &marks, &config()).unwrap();
        assert_eq!(intervals[1], ChunkInterval::new("slow", 400, 1400));
    }

    #[test]
    fn punctuation_only_chunk_takes_next_word_start() {
        let quote = Quote::from_chunks(["Wait", "\u{2014}", "what?"]);
        let marks = words(&[("wait", 0), ("what", 600)]);

        let intervals = reconcile(&quote, &marks, &config()).unwrap();

        assert_eq!(intervals[1], ChunkInterval::new("\u{2014}", 600, 600));
        assert_eq!(intervals[2], ChunkInterval::new("what?", 600, 1600));
    }

    #[test]
    fn empty_quote_with_no_marks_is_empty() {
        let quote = Quote::from_chunks(Vec::<String>::new());
        assert!(reconcile(&quote, &[], &config()).unwrap().is_empty());
        assert!(reconcile(&quote, &words(&[("stray", 0)]), &config()).is_err());
    }
}
