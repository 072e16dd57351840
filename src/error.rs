use std::io;

#[derive(thiserror::Error, Debug)]
pub enum CodecError {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    /// Error returned by a pluggable serializer (e.g. the serde fallback).
    #[error("codec: {0}")]
    Codec(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The source ran out before the value was complete.
    #[error("truncated: {0}")]
    Truncated(&'static str),

    /// Bytes were available but do not form a valid value.
    #[error("corrupt: {0}")]
    Corrupt(&'static str),

    #[error("blob length {len} exceeds limit {max}")]
    LengthLimit { len: usize, max: usize },

    /// Null sub-array rejected by `NullEntries::Reject`.
    #[error("null entry at index {index}")]
    NullEntry { index: usize },

    /// Sub-array rejected by `SubArrayOverflow::Reject`.
    #[error("sub-array {index} is {len} bytes, the length byte holds at most 255")]
    SubArrayTooLong { index: usize, len: usize },

    /// Array blob rejected by `RaggedArrays::Reject`.
    #[error("array blob of {len} bytes is not a multiple of {width}")]
    RaggedArray { len: usize, width: usize },

    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
}

impl CodecError {
    /// True for the truncated/corrupt stream kind, the one failure a decode
    /// of well-formed primitive data can surface.
    pub fn is_data_corruption(&self) -> bool {
        matches!(self, CodecError::Truncated(_) | CodecError::Corrupt(_))
    }
}

pub type Result<T, E = CodecError> = std::result::Result<T, E>;
