//! Transaction scheduling priority.

/// Ordering hint consumed by the transaction scheduler.
///
/// Higher variants are dequeued first. The ordering derives from the
/// discriminants, so `Immediate > High > Get > Set > Config > Poll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransactionPriority {
    /// Background polling traffic, lowest urgency.
    Poll = 0,
    /// Device configuration writes.
    Config = 1,
    /// State-changing commands issued by the user.
    Set = 2,
    /// State queries.
    Get = 3,
    /// High-urgency traffic (e.g. follow-ups inside a running exchange).
    High = 4,
    /// Must go out ahead of everything else queued.
    Immediate = 5,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(TransactionPriority::Immediate > TransactionPriority::High);
        assert!(TransactionPriority::High > TransactionPriority::Get);
        assert!(TransactionPriority::Get > TransactionPriority::Set);
        assert!(TransactionPriority::Set > TransactionPriority::Config);
        assert!(TransactionPriority::Config > TransactionPriority::Poll);
    }
}
