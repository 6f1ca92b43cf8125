use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("gesture script is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("gesture script has no steps")]
    Empty,
    #[error("step {index} names neither pan nor rotate")]
    EmptyStep { index: usize },
    #[error("step {index} at {at_ms}ms goes back in time (previous step at {previous_ms}ms)")]
    OutOfOrder {
        index: usize,
        at_ms: u64,
        previous_ms: u64,
    },
}
