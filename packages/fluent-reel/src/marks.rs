//! Speech-mark ingestion and normalization.
//!
//! Providers deliver marks either as newline-delimited JSON (one mark per
//! line) or as a JSON array. Both single-timestamp and interval marks are
//! accepted; [`normalize_marks`] turns them into [`TimedWord`]s.

use fluent_reel_domain::{SpeechMark, TimedWord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarksError {
    #[error("speech mark line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("speech mark array: {0}")]
    Array(#[from] serde_json::Error),
}

/// Parse provider speech marks, keeping only word marks.
pub fn parse_speech_marks(input: &str) -> Result<Vec<SpeechMark>, MarksError> {
    let trimmed = input.trim_start();
    let marks: Vec<SpeechMark> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)?
    } else {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line).map_err(|source| MarksError::Line {
                    line: i + 1,
                    source,
                })
            })
            .collect::<Result<_, _>>()?
    };

    let total = marks.len();
    let words: Vec<SpeechMark> = marks.into_iter().filter(SpeechMark::is_word).collect();
    if words.len() != total {
        tracing::debug!(
            skipped = total - words.len(),
            kept = words.len(),
            "dropped non-word speech marks"
        );
    }
    Ok(words)
}

/// Normalize marks into start/end words.
///
/// A single-timestamp mark ends where the next mark starts; the final one
/// ends `end_delay_ms` after its own start. Interval marks keep their
/// reported end. Non-word marks are skipped.
pub fn normalize_marks(marks: &[SpeechMark], end_delay_ms: u64) -> Vec<TimedWord> {
    let words: Vec<&SpeechMark> = marks.iter().filter(|m| m.is_word()).collect();

    words
        .iter()
        .enumerate()
        .map(|(i, mark)| {
            let start = mark.start_ms();
            let end = mark.end_ms().unwrap_or_else(|| {
                words
                    .get(i + 1)
                    .map(|next| next.start_ms())
                    .unwrap_or_else(|| start.saturating_add(end_delay_ms))
            });
            TimedWord::new(mark.value(), start, end.max(start))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLLY: &str = r#"{"time":0,"type":"sentence","start":0,"end":23,"value":"Mary had a little lamb."}
{"time":6,"type":"word","start":0,"end":4,"value":"Mary"}
{"time":373,"type":"word","start":5,"end":8,"value":"had"}

{"time":604,"type":"word","start":9,"end":10,"value":"a"}
"#;

    #[test]
    fn parses_json_lines_and_drops_sentence_marks() {
        let marks = parse_speech_marks(POLLY).unwrap();
        let values: Vec<&str> = marks.iter().map(SpeechMark::value).collect();
        assert_eq!(values, ["Mary", "had", "a"]);
        assert_eq!(marks[1].start_ms(), 373);
    }

    #[test]
    fn parses_json_array_of_interval_marks() {
        let input = r#"[{"value":"hi","start":0,"end":200},{"value":"there","start":250,"end":600}]"#;
        let marks = parse_speech_marks(input).unwrap();
        assert_eq!(marks[1], SpeechMark::span("there", 250, 600));
    }

    #[test]
    fn reports_failing_line_number() {
        let input = "{\"time\":0,\"value\":\"ok\"}\n{\"time\":\"soon\"}\n";
        match parse_speech_marks(input) {
            Err(MarksError::Line { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected line error, got {other:?}"),
        }
    }

    #[test]
    fn instant_marks_end_at_next_start_or_delay() {
        let marks = [SpeechMark::instant("one", 100), SpeechMark::instant("two", 450)];
        let words = normalize_marks(&marks, 1500);
        assert_eq!(
            words,
            [TimedWord::new("one", 100, 450), TimedWord::new("two", 450, 1950)]
        );
    }

    #[test]
    fn span_marks_keep_their_end() {
        let marks = [SpeechMark::span("one", 100, 300), SpeechMark::instant("two", 450)];
        let words = normalize_marks(&marks, 1000);
        assert_eq!(words[0], TimedWord::new("one", 100, 300));
        assert_eq!(words[1], TimedWord::new("two", 450, 1450));
    }
}
