//! # Host Bridge Port
//!
//! The capability the notifier is given instead of reaching for a global
//! `MDS` object.

use std::sync::Arc;

use mds_types::Envelope;

use crate::config::DebugEndpoint;

/// Callback invoked once per emitted envelope.
pub type EnvelopeCallback = Arc<dyn Fn(Envelope) + Send + Sync>;

/// Source of node events.
///
/// Implementations deliver envelopes from their own context, one at a time:
/// a callback returns before the next envelope is delivered.
pub trait HostBridge: Send + Sync {
    /// Point the bridge at a development node.
    ///
    /// Only meaningful before `subscribe`. Production hosts never call it.
    fn set_debug_endpoint(&self, endpoint: DebugEndpoint);

    /// Register a callback for every envelope from now on.
    ///
    /// Subscribing twice yields two deliveries per envelope; callers that
    /// need exactly-once delivery subscribe once.
    fn subscribe(&self, callback: EnvelopeCallback);
}
