//! Meshwave Serial Bridge Protocol
//!
//! This crate provides types and utilities for the serial API spoken between
//! a host application and the mesh bridge controller. Every exchange on the
//! serial link is a framed message carrying a function identifier, a
//! request/response discriminator, and a function-specific payload.
//!
//! # Protocol Overview
//!
//! The controller exposes a byte-stream interface (UART or a socket in
//! simulation). Messages are either:
//!
//! - **Requests** (host → controller, or unsolicited controller → host)
//! - **Responses** (controller → host, immediate answer to a request)
//!
//! The message kinds a transaction cares about depend on whether the
//! controller firmware runs in static or bridge mode; see [`ControllerMode`].

mod constants;
mod error;
mod frame;
mod types;

pub use constants::*;
pub use error::*;
pub use frame::*;
pub use types::*;
