//! Time interval during which a quote chunk is spoken.
use serde::{Deserialize, Serialize};

/// Millisecond interval for one chunk, produced in chunk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkInterval {
    /// The chunk text, verbatim.
    pub value: String,
    pub start: u64,
    pub end: u64,
}

impl ChunkInterval {
    pub fn new(value: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            value: value.into(),
            start,
            end,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}
