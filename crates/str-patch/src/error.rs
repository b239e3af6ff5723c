//! Error type shared by the diff and patch codecs.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Combined input length exceeds [`DiffOptions::max_len`](crate::DiffOptions::max_len).
    #[error("RESOURCE_EXCEEDED: {len} chars, limit {limit}")]
    ResourceExceeded { len: usize, limit: usize },
    #[error("INVALID_PATCH: {0}")]
    InvalidPatch(String),
}

pub type Result<T> = std::result::Result<T, Error>;
