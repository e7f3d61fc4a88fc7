//! The transaction descriptor.

use crate::command_class::CommandClass;
use crate::error::TransactionError;
use crate::node::NodeId;
use crate::priority::TransactionPriority;

/// Maximum application payload length.
///
/// The host frame length-prefixes the payload with a single byte.
pub const MAX_TRANSACTION_PAYLOAD: usize = 255;

/// Sentinel for [`TransactionDescriptor::max_attempts`] meaning "use the
/// scheduler's default attempt limit".
pub const ATTEMPTS_SCHEDULER_DEFAULT: u32 = 0;

/// Time the scheduler should allow for one send attempt, in milliseconds.
pub const PER_ATTEMPT_TIMEOUT_MS: u32 = 5000;

/// One outbound command to a node, with its reply-correlation contract and
/// retry/timeout policy.
///
/// The destination and payload are fixed at construction. The scheduler may
/// re-prioritize a queued descriptor, adjust its attempt limit, mark it
/// fire-and-forget, or escalate it to the secure channel; nothing else
/// mutates. A descriptor assumes a single writer: the owning scheduler is
/// the only mutator while the transaction is queued.
#[derive(Debug, Clone)]
pub struct TransactionDescriptor {
    destination_node: NodeId,
    payload: Vec<u8>,
    priority: TransactionPriority,
    expected_response_class: Option<CommandClass>,
    expected_response_command: Option<u8>,
    max_attempts: u32,
    requires_response: bool,
    requires_security: bool,
}

impl TransactionDescriptor {
    /// Create a descriptor for a command to `destination_node`.
    ///
    /// `payload` is the command-class encoding produced by the layer above,
    /// at most 255 bytes. `expected_response_command` may only be given
    /// together with `expected_response_class`.
    pub fn new(
        destination_node: NodeId,
        payload: Vec<u8>,
        priority: TransactionPriority,
        expected_response_class: Option<CommandClass>,
        expected_response_command: Option<u8>,
    ) -> Result<Self, TransactionError> {
        if payload.len() > MAX_TRANSACTION_PAYLOAD {
            return Err(TransactionError::PayloadTooLarge { len: payload.len() });
        }
        if expected_response_class.is_none() && expected_response_command.is_some() {
            return Err(TransactionError::CommandWithoutClass);
        }
        Ok(TransactionDescriptor {
            destination_node,
            payload,
            priority,
            expected_response_class,
            expected_response_command,
            max_attempts: ATTEMPTS_SCHEDULER_DEFAULT,
            requires_response: true,
            requires_security: false,
        })
    }

    /// The node this command is addressed to.
    pub fn destination_node(&self) -> NodeId {
        self.destination_node
    }

    /// The application payload carried by this transaction.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Current scheduling priority.
    pub fn priority(&self) -> TransactionPriority {
        self.priority
    }

    /// Re-prioritize a queued transaction.
    pub fn set_priority(&mut self, priority: TransactionPriority) {
        self.priority = priority;
    }

    /// Total send attempts the scheduler may make before declaring failure.
    ///
    /// [`ATTEMPTS_SCHEDULER_DEFAULT`] (0) leaves the limit to the scheduler.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Set the attempt limit.
    pub fn set_max_attempts(&mut self, max_attempts: u32) {
        self.max_attempts = max_attempts;
    }

    /// Whether the scheduler must wait for a correlated reply.
    ///
    /// When false the transaction is fire-and-forget: it succeeds as soon as
    /// the transport accepts the bytes.
    pub fn requires_response(&self) -> bool {
        self.requires_response
    }

    /// Set whether a correlated reply is required.
    pub fn set_requires_response(&mut self, requires_response: bool) {
        self.requires_response = requires_response;
    }

    /// Whether the transport must route this frame through the secure
    /// channel.
    pub fn requires_security(&self) -> bool {
        self.requires_security
    }

    /// Escalate this transaction to the secure channel.
    ///
    /// One-directional: once marked secure a descriptor cannot be demoted,
    /// so callers cannot accidentally weaken an exchange that has already
    /// been escalated. Idempotent.
    pub fn set_requires_security(&mut self) {
        self.requires_security = true;
    }

    /// Timeout the scheduler must enforce on each send attempt.
    ///
    /// Currently fixed at [`PER_ATTEMPT_TIMEOUT_MS`]; not configurable per
    /// descriptor.
    pub fn timeout_ms(&self) -> u32 {
        PER_ATTEMPT_TIMEOUT_MS
    }

    /// The command class and optional command expected in reply.
    ///
    /// `None` means no class-level correlation was requested.
    pub fn expected_response_identity(&self) -> Option<(CommandClass, Option<u8>)> {
        self.expected_response_class
            .map(|class| (class, self.expected_response_command))
    }

    /// Decide whether an inbound application command is the reply this
    /// transaction is waiting for.
    ///
    /// Matches when a reply is required at all, the source node is the
    /// destination (or the destination was broadcast), and the class and
    /// command agree with the expected identity. With no expected class set
    /// the transaction correlates on source node alone; callers needing a
    /// stricter guarantee must set both expected fields.
    ///
    /// Non-matches are a normal outcome (stray frame, retransmission, reply
    /// to a different transaction), so this never errors.
    pub fn matches_response(
        &self,
        actual_class: CommandClass,
        actual_command: u8,
        actual_source_node: NodeId,
    ) -> bool {
        if !self.requires_response {
            return false;
        }
        if actual_source_node != self.destination_node && !self.destination_node.is_broadcast() {
            return false;
        }
        match self.expected_response_class {
            None => true,
            Some(expected_class) => {
                expected_class == actual_class
                    && self
                        .expected_response_command
                        .map_or(true, |expected| expected == actual_command)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(
        class: Option<CommandClass>,
        command: Option<u8>,
    ) -> TransactionDescriptor {
        TransactionDescriptor::new(
            NodeId::new(12).unwrap(),
            vec![0x25, 0x02],
            TransactionPriority::Get,
            class,
            command,
        )
        .expect("valid descriptor")
    }

    #[test]
    fn test_defaults() {
        let tx = descriptor(None, None);
        assert_eq!(tx.max_attempts(), ATTEMPTS_SCHEDULER_DEFAULT);
        assert!(tx.requires_response());
        assert!(!tx.requires_security());
        assert_eq!(tx.priority(), TransactionPriority::Get);
    }

    #[test]
    fn test_payload_length_limit() {
        let result = TransactionDescriptor::new(
            NodeId::new(1).unwrap(),
            vec![0; 256],
            TransactionPriority::Set,
            None,
            None,
        );
        assert_eq!(
            result.unwrap_err(),
            TransactionError::PayloadTooLarge { len: 256 }
        );

        let at_limit = TransactionDescriptor::new(
            NodeId::new(1).unwrap(),
            vec![0; 255],
            TransactionPriority::Set,
            None,
            None,
        );
        assert!(at_limit.is_ok());
    }

    #[test]
    fn test_command_without_class_rejected() {
        let result = TransactionDescriptor::new(
            NodeId::new(1).unwrap(),
            vec![],
            TransactionPriority::Set,
            None,
            Some(0x03),
        );
        assert_eq!(result.unwrap_err(), TransactionError::CommandWithoutClass);
    }

    #[test]
    fn test_expected_response_identity() {
        assert_eq!(descriptor(None, None).expected_response_identity(), None);
        assert_eq!(
            descriptor(Some(CommandClass::SWITCH_BINARY), None).expected_response_identity(),
            Some((CommandClass::SWITCH_BINARY, None))
        );
        assert_eq!(
            descriptor(Some(CommandClass::SWITCH_BINARY), Some(0x03))
                .expected_response_identity(),
            Some((CommandClass::SWITCH_BINARY, Some(0x03)))
        );
    }

    #[test]
    fn test_match_class_only() {
        let tx = descriptor(Some(CommandClass::SWITCH_BINARY), None);
        let source = NodeId::new(12).unwrap();

        // Any command within the expected class matches
        assert!(tx.matches_response(CommandClass::SWITCH_BINARY, 0x03, source));
        assert!(tx.matches_response(CommandClass::SWITCH_BINARY, 0x42, source));
        // Wrong class never matches
        assert!(!tx.matches_response(CommandClass::BASIC, 0x03, source));
    }

    #[test]
    fn test_match_class_and_command() {
        let tx = descriptor(Some(CommandClass::SWITCH_BINARY), Some(0x03));
        let source = NodeId::new(12).unwrap();

        assert!(tx.matches_response(CommandClass::SWITCH_BINARY, 0x03, source));
        assert!(!tx.matches_response(CommandClass::SWITCH_BINARY, 0x04, source));
        assert!(!tx.matches_response(CommandClass::BASIC, 0x03, source));
    }

    #[test]
    fn test_match_requires_correct_source() {
        let tx = descriptor(Some(CommandClass::SWITCH_BINARY), Some(0x03));
        let other = NodeId::new(13).unwrap();
        assert!(!tx.matches_response(CommandClass::SWITCH_BINARY, 0x03, other));
    }

    #[test]
    fn test_match_broadcast_accepts_any_source() {
        let tx = TransactionDescriptor::new(
            NodeId::BROADCAST,
            vec![0x20, 0x01, 0xFF],
            TransactionPriority::Immediate,
            Some(CommandClass::BASIC),
            None,
        )
        .unwrap();
        assert!(tx.matches_response(CommandClass::BASIC, 0x03, NodeId::new(7).unwrap()));
        assert!(tx.matches_response(CommandClass::BASIC, 0x03, NodeId::new(200).unwrap()));
    }

    #[test]
    fn test_match_without_class_correlates_on_source() {
        let tx = descriptor(None, None);
        assert!(tx.matches_response(CommandClass::BASIC, 0x03, NodeId::new(12).unwrap()));
        assert!(!tx.matches_response(CommandClass::BASIC, 0x03, NodeId::new(13).unwrap()));
    }

    #[test]
    fn test_no_match_when_fire_and_forget() {
        let mut tx = descriptor(Some(CommandClass::SWITCH_BINARY), Some(0x03));
        tx.set_requires_response(false);
        assert!(!tx.matches_response(CommandClass::SWITCH_BINARY, 0x03, NodeId::new(12).unwrap()));
    }

    #[test]
    fn test_security_escalation_is_one_way_and_idempotent() {
        let mut tx = descriptor(None, None);
        assert!(!tx.requires_security());
        tx.set_requires_security();
        assert!(tx.requires_security());
        tx.set_requires_security();
        assert!(tx.requires_security());
    }

    #[test]
    fn test_reprioritize() {
        let mut tx = descriptor(None, None);
        tx.set_priority(TransactionPriority::Immediate);
        assert_eq!(tx.priority(), TransactionPriority::Immediate);
        tx.set_max_attempts(3);
        assert_eq!(tx.max_attempts(), 3);
    }
}
