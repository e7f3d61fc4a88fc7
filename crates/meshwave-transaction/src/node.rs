//! Node addressing.

use std::fmt;

use crate::error::TransactionError;

/// Highest node identifier the controller assigns to a device on inclusion.
pub const MAX_NODE_ID: u8 = 232;
/// Reserved destination meaning "all nodes".
pub const BROADCAST_NODE_ID: u8 = 0xFF;

/// An addressable endpoint on the mesh network.
///
/// Controllers assign identifiers 1..=232 on inclusion; 255 is the broadcast
/// address. Only 0 is rejected here — whether a destination actually exists
/// is for the node registry to decide, not this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u8);

impl NodeId {
    /// The broadcast address, addressing every node in range.
    pub const BROADCAST: NodeId = NodeId(BROADCAST_NODE_ID);

    /// Create a node identifier, rejecting the unused zero address.
    pub fn new(id: u8) -> Result<Self, TransactionError> {
        match id {
            0 => Err(TransactionError::InvalidNodeId(0)),
            other => Ok(NodeId(other)),
        }
    }

    /// Whether this is the broadcast address.
    pub fn is_broadcast(self) -> bool {
        self.0 == BROADCAST_NODE_ID
    }

    /// Get the wire byte for this node identifier.
    pub fn to_byte(self) -> u8 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_broadcast() {
            write!(f, "broadcast")
        } else {
            write!(f, "node {}", self.0)
        }
    }
}

impl From<NodeId> for u8 {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicast_range_accepted() {
        for id in [1u8, MAX_NODE_ID, 233, 240, 254] {
            assert!(NodeId::new(id).is_ok(), "node {id} rejected");
        }
    }

    #[test]
    fn test_zero_rejected() {
        assert_eq!(NodeId::new(0), Err(TransactionError::InvalidNodeId(0)));
    }

    #[test]
    fn test_broadcast() {
        let id = NodeId::new(BROADCAST_NODE_ID).expect("broadcast is valid");
        assert!(id.is_broadcast());
        assert_eq!(id, NodeId::BROADCAST);
        assert!(!NodeId::new(5).unwrap().is_broadcast());
    }
}
