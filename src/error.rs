use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    /// A prefix longer than the sequence itself was requested.
    #[error("requested length {len} exceeds sequence length {capacity}")]
    LengthOutOfBounds { len: usize, capacity: usize },

    #[error("failed to write sorted values: {0}")]
    Io(#[from] io::Error),
}
