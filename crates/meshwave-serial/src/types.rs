//! Common types used in the serial protocol.

use crate::constants::*;
use crate::error::FrameError;

/// Serial API function identifiers relevant to application transactions.
///
/// Only the send/notify pairs for the two controller firmware variants are
/// modeled; other serial API functions (inclusion, NVM access, ...) live
/// outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Send application data to a node (static controller).
    SendData,
    /// Unsolicited application command from a node (static controller).
    ApplicationCommandHandler,
    /// Send application data to a node (bridge controller).
    SendDataBridge,
    /// Unsolicited application command from a node (bridge controller).
    ApplicationCommandHandlerBridge,
}

impl MessageKind {
    /// Get the wire byte for this message kind.
    pub fn to_byte(self) -> u8 {
        match self {
            MessageKind::SendData => FUNC_SEND_DATA,
            MessageKind::ApplicationCommandHandler => FUNC_APPLICATION_COMMAND_HANDLER,
            MessageKind::SendDataBridge => FUNC_SEND_DATA_BRIDGE,
            MessageKind::ApplicationCommandHandlerBridge => {
                FUNC_APPLICATION_COMMAND_HANDLER_BRIDGE
            }
        }
    }

    /// Parse a message kind from its wire byte.
    pub fn from_byte(byte: u8) -> Result<Self, FrameError> {
        match byte {
            FUNC_SEND_DATA => Ok(MessageKind::SendData),
            FUNC_APPLICATION_COMMAND_HANDLER => Ok(MessageKind::ApplicationCommandHandler),
            FUNC_SEND_DATA_BRIDGE => Ok(MessageKind::SendDataBridge),
            FUNC_APPLICATION_COMMAND_HANDLER_BRIDGE => {
                Ok(MessageKind::ApplicationCommandHandlerBridge)
            }
            other => Err(FrameError::UnknownMessageKind(other)),
        }
    }
}

/// Request/response discriminator carried in every serial frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageDirection {
    /// Host → controller command, or unsolicited controller → host push.
    Request,
    /// Solicited controller → host answer.
    Response,
}

impl MessageDirection {
    /// Get the wire byte for this direction.
    pub fn to_byte(self) -> u8 {
        match self {
            MessageDirection::Request => DIR_REQUEST,
            MessageDirection::Response => DIR_RESPONSE,
        }
    }

    /// Parse a direction from its wire byte.
    pub fn from_byte(byte: u8) -> Result<Self, FrameError> {
        match byte {
            DIR_REQUEST => Ok(MessageDirection::Request),
            DIR_RESPONSE => Ok(MessageDirection::Response),
            other => Err(FrameError::UnknownDirection(other)),
        }
    }
}

/// Operating mode of the controller firmware.
///
/// The firmware variant decides which function identifiers carry outbound
/// application data and which announce inbound application commands. Callers
/// discover the mode during controller initialization and inject it here;
/// nothing in this crate hard-codes one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerMode {
    /// Static controller firmware.
    Static,
    /// Bridge controller firmware.
    Bridge,
}

impl ControllerMode {
    /// Message kind used to send application data in this mode.
    pub fn send_data_kind(self) -> MessageKind {
        match self {
            ControllerMode::Static => MessageKind::SendData,
            ControllerMode::Bridge => MessageKind::SendDataBridge,
        }
    }

    /// Message kind announcing an inbound application command in this mode.
    pub fn application_command_kind(self) -> MessageKind {
        match self {
            ControllerMode::Static => MessageKind::ApplicationCommandHandler,
            ControllerMode::Bridge => MessageKind::ApplicationCommandHandlerBridge,
        }
    }
}

impl Default for ControllerMode {
    fn default() -> Self {
        ControllerMode::Bridge
    }
}
