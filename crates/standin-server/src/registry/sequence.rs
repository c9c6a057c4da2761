//! Consumption of sequenced responses.

use super::types::{MockResponse, ResponseSpec};
use crate::error::MockError;

impl MockResponse {
    /// Produce the next response to replay.
    ///
    /// A `Single` response is replayed unchanged on every call; the stored
    /// value is never mutated. A `Sequence` is consumed front-first: each
    /// call removes and returns the head, so repeat calls walk the sequence
    /// in FIFO order. An exhausted sequence is an error whose message marks
    /// it apart from a key that never matched, though the kind is the same.
    pub fn take_next(&mut self) -> Result<ResponseSpec, MockError> {
        match self {
            MockResponse::Single(spec) => Ok(spec.clone()),
            MockResponse::Sequence(specs) => {
                if specs.is_empty() {
                    return Err(MockError::NotFound(
                        "mock matched but its response sequence is exhausted".to_string(),
                    ));
                }
                Ok(specs.remove(0))
            }
        }
    }

    /// Responses left to serve, or `None` for a single response that never
    /// depletes.
    pub fn remaining(&self) -> Option<usize> {
        match self {
            MockResponse::Single(_) => None,
            MockResponse::Sequence(specs) => Some(specs.len()),
        }
    }
}
