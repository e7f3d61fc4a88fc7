//! Transaction frame encoding.

use meshwave_serial::{ControllerMode, MessageDirection, MessageKind, SerialFrame};

use crate::descriptor::TransactionDescriptor;

/// Node identifier of the local endpoint, used as the frame source address.
pub const SOURCE_NODE_ID: u8 = 1;

/// Everything the scheduler needs for one send attempt of a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTransaction {
    /// The serial frame to hand to the transport.
    pub frame: SerialFrame,
    /// Message kind of the expected reply, or `None` for fire-and-forget.
    pub expected_reply_kind: Option<MessageKind>,
    /// Per-attempt timeout the scheduler must enforce.
    pub timeout_ms: u32,
    /// Whether the transport must use the secure channel.
    pub requires_security: bool,
    /// Whether an intermediate data frame precedes the final reply.
    /// Always false for send-data transactions.
    pub requires_data: bool,
}

/// Serializes transaction descriptors into serial frames.
///
/// Stateless and deterministic: the same descriptor always yields the same
/// bytes. The controller operating mode is injected at construction because
/// it decides both the outbound function identifier and the kind of the
/// expected reply; it is a property of the controller firmware, not of any
/// single transaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameEncoder {
    mode: ControllerMode,
}

impl FrameEncoder {
    /// Create an encoder for a controller running in `mode`.
    pub fn new(mode: ControllerMode) -> Self {
        FrameEncoder { mode }
    }

    /// The controller mode this encoder targets.
    pub fn mode(&self) -> ControllerMode {
        self.mode
    }

    /// Encode a descriptor into the serial frame the transport must emit.
    ///
    /// The function payload is the host addressing header followed by the
    /// application payload:
    ///
    /// ```text
    /// +-----------+-----------+---------+------------------+
    /// | src_node  | dest_node | len     | payload[0..len]  |
    /// +-----------+-----------+---------+------------------+
    /// ```
    ///
    /// An empty application payload yields a 3-byte function payload with a
    /// zero length byte. A broadcast destination simply places 0xFF in the
    /// destination byte; whether broadcast is permitted in the current
    /// network mode is the transport's decision.
    pub fn encode(&self, descriptor: &TransactionDescriptor) -> SerialFrame {
        let payload = descriptor.payload();
        let mut data = Vec::with_capacity(3 + payload.len());
        data.push(SOURCE_NODE_ID);
        data.push(descriptor.destination_node().to_byte());
        data.push(payload.len() as u8);
        data.extend_from_slice(payload);

        log::trace!(
            "encoded {} byte frame for {} ({:?})",
            data.len(),
            descriptor.destination_node(),
            self.mode,
        );

        // Descriptor payloads are capped at 255 bytes, well under the
        // serial frame limit, so the frame invariant holds by construction.
        SerialFrame {
            kind: self.mode.send_data_kind(),
            direction: MessageDirection::Request,
            payload: data,
        }
    }

    /// Message kind of the frame that will carry this transaction's reply.
    ///
    /// `None` when the descriptor expects no response class. Otherwise a
    /// single constant per controller mode: the controller announces every
    /// inbound application command with the same function identifier, so
    /// class-level disambiguation happens in
    /// [`TransactionDescriptor::matches_response`], not here.
    pub fn expected_reply_kind(&self, descriptor: &TransactionDescriptor) -> Option<MessageKind> {
        descriptor
            .expected_response_identity()
            .map(|_| self.mode.application_command_kind())
    }

    /// Whether an intermediate data frame precedes the final reply.
    ///
    /// Send-data transactions complete with either the application command
    /// reply or nothing; the scheduler must not wait for anything else.
    pub fn requires_data(&self) -> bool {
        false
    }

    /// Bundle one send attempt for the scheduler.
    pub fn prepare(&self, descriptor: &TransactionDescriptor) -> EncodedTransaction {
        EncodedTransaction {
            frame: self.encode(descriptor),
            expected_reply_kind: self.expected_reply_kind(descriptor),
            timeout_ms: descriptor.timeout_ms(),
            requires_security: descriptor.requires_security(),
            requires_data: self.requires_data(),
        }
    }
}
