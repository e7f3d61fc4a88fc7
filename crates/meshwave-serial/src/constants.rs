//! Protocol constants
//!
//! These constants define the frame delimiters, function identifier bytes,
//! and size limits used on the serial link to the bridge controller.

// ============================================================================
// Frame delimiters
// ============================================================================

/// Start-of-frame marker preceding every serial message.
pub const SOF: u8 = 0x01;
/// Positive acknowledgement of a received frame.
pub const ACK: u8 = 0x06;
/// Negative acknowledgement (checksum failure).
pub const NAK: u8 = 0x15;
/// Cancel a partially received frame.
pub const CAN: u8 = 0x18;

// ============================================================================
// Function identifiers (message kinds)
// ============================================================================

/// Send application data to a node (static controller).
pub const FUNC_SEND_DATA: u8 = 0x13;
/// Unsolicited application command from a node (static controller).
pub const FUNC_APPLICATION_COMMAND_HANDLER: u8 = 0x04;
/// Send application data to a node (bridge controller).
pub const FUNC_SEND_DATA_BRIDGE: u8 = 0xA9;
/// Unsolicited application command from a node (bridge controller).
pub const FUNC_APPLICATION_COMMAND_HANDLER_BRIDGE: u8 = 0xA8;

// ============================================================================
// Direction discriminators
// ============================================================================

/// Request discriminator byte (host → controller, or unsolicited push).
pub const DIR_REQUEST: u8 = 0x00;
/// Response discriminator byte (controller → host, solicited).
pub const DIR_RESPONSE: u8 = 0x01;

// ============================================================================
// Size limits
// ============================================================================

/// Maximum function payload per serial frame.
pub const MAX_SERIAL_PAYLOAD: usize = 1024;

/// Frame overhead: SOF + length (2 bytes) + direction + kind + checksum.
pub const FRAME_OVERHEAD: usize = 6;
