//! Command class identifiers.

use std::fmt;

/// A command class: a logical grouping of related commands a node
/// understands, identified by its key byte.
///
/// This crate treats command classes as opaque identifiers for correlation
/// purposes; encoding and decoding of class payloads happens in the
/// command-class layer above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandClass(pub u8);

impl CommandClass {
    /// Basic set/get/report.
    pub const BASIC: CommandClass = CommandClass(0x20);
    /// Binary switch control.
    pub const SWITCH_BINARY: CommandClass = CommandClass(0x25);
    /// Multilevel switch control.
    pub const SWITCH_MULTILEVEL: CommandClass = CommandClass(0x26);
    /// Multilevel sensor readings.
    pub const SENSOR_MULTILEVEL: CommandClass = CommandClass(0x31);
    /// Device configuration parameters.
    pub const CONFIGURATION: CommandClass = CommandClass(0x70);

    /// Get the key byte for this command class.
    pub fn key(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CommandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

impl From<u8> for CommandClass {
    fn from(key: u8) -> Self {
        CommandClass(key)
    }
}
