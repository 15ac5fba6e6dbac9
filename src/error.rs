//! Error types for chunkwire.

use thiserror::Error;

use crate::protocol::Tag;

/// Main error type for all chunkwire operations.
#[derive(Debug, Error)]
pub enum ChunkwireError {
    /// I/O error while moving chunks over a stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A typed read found a different element kind at the cursor.
    ///
    /// Recoverable: the cursor has not moved, so retrying with the
    /// correct kind succeeds.
    #[error("type mismatch: expected {expected:?}, found {found:?}")]
    TypeMismatch { expected: Tag, found: Tag },

    /// Tag byte outside the defined element set.
    ///
    /// Indicates corruption or a desynchronized cursor; the packet
    /// should be abandoned.
    #[error("unknown element tag {byte:#04x}")]
    UnknownTag { byte: u8 },

    /// Raw data appended to a packet that already reported finished.
    #[error("append after packet finished")]
    AppendAfterFinished,

    /// Seed bytes shorter than the 4-byte length header.
    #[error("header too short: got {actual} bytes, need 4")]
    HeaderTooShort { actual: usize },

    /// A length or count field points past the bytes actually present,
    /// or a read crossed the logical end of the packet.
    #[error("truncated element: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    /// String payload is not valid UTF-8.
    #[error("invalid UTF-8 in string payload: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Result type alias using ChunkwireError.
pub type Result<T> = std::result::Result<T, ChunkwireError>;
