//! # MDS Bridge - Host Event Source
//!
//! The node hands events to a MiniDapp through a host bridge object. This
//! crate narrows that object to the two things the wallet needs from it:
//!
//! - **Configuration**: an optional debug endpoint, set before subscribing
//!   when running against a development node
//! - **Subscription**: one callback that receives every `Envelope` the host
//!   emits
//!
//! ```text
//! ┌──────────────┐  emit()   ┌──────────────┐  callback   ┌──────────────┐
//! │  Node / I/O  │ ────────→ │  HostBridge  │ ──────────→ │   Notifier   │
//! └──────────────┘           └──────────────┘             └──────────────┘
//! ```
//!
//! `InMemoryHostBridge` is the in-process implementation; `pump_lines` feeds
//! it from any newline-delimited JSON source (stdin, a socket, a file).

#![allow(clippy::missing_const_for_fn)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod bridge;
pub mod config;
pub mod error;
pub mod in_memory;
pub mod stream;

pub use bridge::{EnvelopeCallback, HostBridge};
pub use config::DebugEndpoint;
pub use error::BridgeError;
pub use in_memory::InMemoryHostBridge;
pub use stream::{pump_lines, PumpStats};
