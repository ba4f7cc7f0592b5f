//! Error types for the codec and rasterizer

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling share codes.
///
/// These are internal to the strict (`try_*`) entry points; the infallible
/// `decode`/`encode` wrappers never surface them and fall back to the
/// documented defaults instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The code does not match the `CSGO-xxxxx-...` shape
    #[error("share code rejected: {0}")]
    CodeFormat(String),

    /// A payload character is not part of the base-57 alphabet
    #[error("invalid share code character: {0:?}")]
    InvalidChar(char),

    /// The decoded payload does not fit in the 18-byte wire buffer
    #[error("share code payload overflows 18 bytes")]
    Overflow,

    /// Byte 0 disagrees with the modulo-256 sum of bytes 1..18
    #[error("checksum mismatch: expected {expected:#04x}, found {found:#04x}")]
    Checksum { expected: u8, found: u8 },

    /// Generic error
    #[error("{0}")]
    Other(String),
}
