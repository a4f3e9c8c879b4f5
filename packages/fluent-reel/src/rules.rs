//! Letter classification shared by the segmenter and the chunk tokenizer.

use crate::config::HyphenHandling;

/// Decides which characters belong to a spoken word.
///
/// Letters are ASCII alphabetic characters and the apostrophe. Under
/// [`HyphenHandling::Join`] a hyphen continues the current word without
/// appearing in its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordRules {
    hyphens: HyphenHandling,
}

impl WordRules {
    pub fn new(hyphens: HyphenHandling) -> Self {
        Self { hyphens }
    }

    /// True if `c` continues a word in a character stream.
    pub fn is_letter(&self, c: char) -> bool {
        c.is_ascii_alphabetic()
            || c == '\''
            || (c == '-' && self.hyphens == HyphenHandling::Join)
    }

    /// True if `c` is kept in the emitted word value.
    pub fn is_emitted(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || c == '\''
    }

    /// Split a chunk into the word tokens a provider is expected to mark.
    ///
    /// Everything other than ASCII letters, digits, whitespace and
    /// apostrophes is stripped. Hyphens become a space or vanish depending
    /// on [`HyphenHandling`]. Tokens keep their original case.
    pub fn tokenize(&self, chunk: &str) -> Vec<String> {
        let cleaned: String = chunk
            .chars()
            .filter_map(|c| match c {
                '-' if self.hyphens == HyphenHandling::Separate => Some(' '),
                c if c.is_ascii_alphanumeric() || c.is_whitespace() || c == '\'' => Some(c),
                _ => None,
            })
            .collect();

        cleaned.split_whitespace().map(str::to_owned).collect()
    }
}
