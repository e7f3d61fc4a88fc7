//! Transaction error types.

use thiserror::Error;

/// Errors raised when constructing a transaction descriptor.
///
/// All variants are construction-time contract violations. Once a descriptor
/// exists, encoding and response matching cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// Payload exceeds the one-byte length prefix of the frame format.
    #[error("payload too large: {len} bytes (max 255)")]
    PayloadTooLarge {
        /// Actual payload length.
        len: usize,
    },

    /// An expected response command was given without a response class.
    #[error("expected response command set without an expected response class")]
    CommandWithoutClass,

    /// The reserved zero node identifier.
    #[error("invalid node id: {0}")]
    InvalidNodeId(u8),
}
