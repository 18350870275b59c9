//! Error types for oxblend
//!
//! The blend arithmetic itself never fails. Color text is rejected with a
//! [`ParseColorError`]; [`Error`] covers the pixel buffer entry points.

use thiserror::Error;

/// Result type for oxblend operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxblend operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Buffer is not a whole number of RGB8 pixels
    #[error("Buffer length {len} is not a multiple of 3")]
    BufferLayout { len: usize },

    /// Requested normal map is too large to address
    #[error("Normal map size {size} overflows the buffer length")]
    SizeOverflow { size: u32 },
}

/// Reasons a color string can be rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex length {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit {0:?}")]
    InvalidHex(char),

    #[error("invalid rgb() function")]
    InvalidFunc,

    #[error("component out of range")]
    OutOfRange,
}

/// Unknown blend mode name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown blend mode: {0}")]
pub struct UnknownBlendMode(pub String);
