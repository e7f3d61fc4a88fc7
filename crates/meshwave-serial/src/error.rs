//! Serial protocol error types.

use thiserror::Error;

/// Errors that can occur when framing or parsing serial messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Frame is too short to be valid.
    #[error("frame too short: expected at least {expected} bytes, got {actual}")]
    TooShort {
        /// Expected minimum length.
        expected: usize,
        /// Actual length received.
        actual: usize,
    },

    /// Function payload exceeds what the length byte can describe.
    #[error("payload too large: maximum {max} bytes, got {actual}")]
    PayloadTooLarge {
        /// Maximum allowed payload length.
        max: usize,
        /// Actual payload length.
        actual: usize,
    },

    /// First byte is not the start-of-frame marker.
    #[error("bad start of frame: 0x{0:02X}")]
    BadSof(u8),

    /// Length byte disagrees with the number of bytes present.
    #[error("length mismatch: length byte says {declared}, frame holds {actual}")]
    LengthMismatch {
        /// Length the frame declares.
        declared: usize,
        /// Length actually present.
        actual: usize,
    },

    /// Checksum verification failed.
    #[error("checksum mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    ChecksumMismatch {
        /// Checksum computed over the frame.
        expected: u8,
        /// Checksum carried in the frame.
        actual: u8,
    },

    /// Unknown function identifier byte.
    #[error("unknown message kind: 0x{0:02X}")]
    UnknownMessageKind(u8),

    /// Unknown request/response discriminator byte.
    #[error("unknown direction: 0x{0:02X}")]
    UnknownDirection(u8),
}
