//! # MDS Types Crate
//!
//! Types for the events a Minima node pushes to a MiniDapp through the host
//! bridge (`MDS`).
//!
//! ## Design Principles
//!
//! - **Closed tag set**: `EventTag` names every tag this workspace understands.
//!   Anything else is an unknown tag, never a guess.
//! - **Tag-indexed payloads**: `NodeEvent` has one variant per tag, so a
//!   payload is only ever valid under the tag that carries it.
//! - **Lossless**: fields the wallet does not read are kept as raw JSON.

pub mod entities;
pub mod envelope;
pub mod errors;
pub mod tags;

pub use entities::*;
pub use envelope::{Envelope, NodeEvent};
pub use errors::DecodeError;
pub use tags::{EventTag, TimerInterval};
