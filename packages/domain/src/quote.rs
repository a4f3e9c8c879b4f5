//! Quote text plus its display chunking.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generated text and the display-sized chunks it was split into.
///
/// Joining `chunks` with single spaces reproduces `text`. Construction via
/// [`Quote::new`] enforces that; the alignment engine assumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub chunks: Vec<String>,
}

impl Quote {
    /// Build a quote, rejecting chunkings that do not reproduce the text.
    pub fn new(text: impl Into<String>, chunks: Vec<String>) -> Result<Self, QuoteError> {
        let quote = Self {
            text: text.into(),
            chunks,
        };
        quote.validate()?;
        Ok(quote)
    }

    /// Build a quote whose text is the chunks joined by single spaces.
    pub fn from_chunks<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let chunks: Vec<String> = chunks.into_iter().map(Into::into).collect();
        Self {
            text: chunks.join(" "),
            chunks,
        }
    }

    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.chunks.is_empty() {
            return Err(QuoteError::Empty);
        }
        let joined = self.chunks.join(" ");
        if joined != self.text {
            return Err(QuoteError::ChunkMismatch {
                joined,
                text: self.text.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("quote has no chunks")]
    Empty,
    #[error("chunks joined with spaces do not reproduce the quote text: {joined:?} != {text:?}")]
    ChunkMismatch { joined: String, text: String },
}
