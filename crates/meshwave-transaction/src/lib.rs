//! Meshwave Transactions
//!
//! This crate models one outbound command to a node on the mesh network: the
//! [`TransactionDescriptor`] capturing what to send and what reply to expect,
//! and the [`FrameEncoder`] turning a descriptor into the serial frame the
//! transport must emit.
//!
//! The descriptor is a value object. It owns no transport resources and
//! performs no I/O; an external scheduler queues descriptors by
//! [`TransactionPriority`], hands encoded frames to the transport, and uses
//! [`TransactionDescriptor::matches_response`] to correlate inbound
//! application commands back to the transaction that solicited them. Retry
//! counts and timeouts are plain data here; enforcing them is the
//! scheduler's job.
//!
//! # Example
//!
//! ```rust,ignore
//! use meshwave_transaction::{
//!     CommandClass, FrameEncoder, NodeId, TransactionDescriptor, TransactionPriority,
//! };
//!
//! let descriptor = TransactionDescriptor::new(
//!     NodeId::new(5)?,
//!     vec![0x25, 0x02],
//!     TransactionPriority::Get,
//!     Some(CommandClass::SWITCH_BINARY),
//!     Some(0x03),
//! )?;
//!
//! let encoder = FrameEncoder::default();
//! let prepared = encoder.prepare(&descriptor);
//! // hand prepared.frame to the transport, wait up to prepared.timeout_ms
//! ```

mod command_class;
mod descriptor;
mod encoder;
mod error;
mod node;
mod priority;

pub use command_class::*;
pub use descriptor::*;
pub use encoder::*;
pub use error::*;
pub use node::*;
pub use priority::*;
