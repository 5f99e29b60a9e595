//! # Wallet Events
//!
//! Event notifier between the node's host bridge and wallet code.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): no I/O
//!   - `CallbackBindings`: one active handler per application tag
//!   - `EventHandler`: a tag paired with a handler of that tag's payload type
//!   - `DispatchOutcome`: what happened to one envelope
//!   - `NotifierConfig`: debug endpoint and handler isolation
//!
//! - **Service Layer** (`service/`)
//!   - `EventNotifier`: registration functions, bridge connection, dispatch
//!
//! - **Metrics** (`metrics`): dispatch counters
//!
//! ## Dispatch Rules
//!
//! For each envelope the bridge delivers:
//!
//! 1. Decode the tag.
//! 2. Application tag: invoke the bound handler synchronously with the payload.
//! 3. Host-reserved tag (timer ticks, Maxima host list): ignore silently.
//! 4. Unknown tag or malformed payload: report and drop.
//!
//! A handler panic is caught and reported; the next envelope is delivered
//! as usual.
//!
//! ## Usage Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use mds_bridge::InMemoryHostBridge;
//! use wallet_events::{EventNotifier, NotifierConfig};
//!
//! let bridge = Arc::new(InMemoryHostBridge::new());
//! let notifier = EventNotifier::new(bridge.clone(), NotifierConfig::default());
//!
//! notifier.on_new_block(|data| println!("block {}", data.txpow.txpowid));
//! notifier.on_init(|| println!("connected"));   // subscribes to the bridge
//!
//! bridge.emit_json(r#"{"event":"inited"}"#)?;
//! ```

#![allow(clippy::missing_const_for_fn)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod domain;
pub mod error;
pub mod metrics;
pub mod service;

pub use domain::{
    CallbackBindings, DispatchOutcome, EventHandler, Handler, InitHandler, NotifierConfig,
};
pub use error::NotifierError;
pub use metrics::{DispatchMetrics, MetricsSnapshot};
pub use service::EventNotifier;
