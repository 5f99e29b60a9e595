//! # In-Memory Host Bridge
//!
//! Delivers envelopes to subscribers synchronously, in subscription order.

use std::sync::atomic::{AtomicU64, Ordering};

use mds_types::Envelope;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::bridge::{EnvelopeCallback, HostBridge};
use crate::config::DebugEndpoint;
use crate::error::BridgeError;

/// In-process implementation of `HostBridge`.
///
/// Suitable for tests and for hosts that receive node events over their own
/// transport and push them in with `emit` / `emit_json`.
///
/// Deliveries are serialised: a second `emit` from another thread waits
/// until the first has run every callback. Callbacks must not call `emit`
/// on the same bridge.
pub struct InMemoryHostBridge {
    /// Subscribed callbacks, in subscription order.
    subscribers: RwLock<Vec<EnvelopeCallback>>,

    /// Held for the duration of one delivery.
    delivery: Mutex<()>,

    /// Development endpoint, if configured.
    debug_endpoint: RwLock<Option<DebugEndpoint>>,

    /// Total envelopes emitted.
    events_emitted: AtomicU64,
}

impl InMemoryHostBridge {
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
            delivery: Mutex::new(()),
            debug_endpoint: RwLock::new(None),
            events_emitted: AtomicU64::new(0),
        }
    }

    /// Deliver an envelope to every subscriber.
    ///
    /// # Returns
    ///
    /// The number of callbacks that received the envelope.
    pub fn emit(&self, envelope: Envelope) -> usize {
        let _delivering = self.delivery.lock();
        self.events_emitted.fetch_add(1, Ordering::Relaxed);

        // Snapshot so a callback may subscribe without deadlocking.
        let subscribers = self.subscribers.read().clone();
        if subscribers.is_empty() {
            warn!(event = %envelope.event, "Event dropped (no subscribers)");
            return 0;
        }

        for callback in &subscribers {
            callback(envelope.clone());
        }

        debug!(
            event = %envelope.event,
            receivers = subscribers.len(),
            "Event delivered"
        );
        subscribers.len()
    }

    /// Parse one wire envelope and deliver it.
    pub fn emit_json(&self, raw: &str) -> Result<usize, BridgeError> {
        let envelope = Envelope::from_json(raw)?;
        Ok(self.emit(envelope))
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    #[must_use]
    pub fn events_emitted(&self) -> u64 {
        self.events_emitted.load(Ordering::Relaxed)
    }

    /// The configured development endpoint.
    #[must_use]
    pub fn debug_endpoint(&self) -> Option<DebugEndpoint> {
        self.debug_endpoint.read().clone()
    }
}

impl Default for InMemoryHostBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl HostBridge for InMemoryHostBridge {
    fn set_debug_endpoint(&self, endpoint: DebugEndpoint) {
        info!(
            address = %endpoint.address(),
            minidapp_id = %endpoint.minidapp_id,
            "Debug endpoint configured"
        );
        *self.debug_endpoint.write() = Some(endpoint);
    }

    fn subscribe(&self, callback: EnvelopeCallback) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(callback);
        debug!(subscribers = subscribers.len(), "New subscription created");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, EnvelopeCallback) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback: EnvelopeCallback = Arc::new(move |env: Envelope| {
            sink.lock().push(env.event);
        });
        (seen, callback)
    }

    #[test]
    fn test_emit_no_subscribers() {
        let bridge = InMemoryHostBridge::new();
        let receivers = bridge.emit(Envelope::new("NEWBLOCK", None));
        assert_eq!(receivers, 0);
        assert_eq!(bridge.events_emitted(), 1);
    }

    #[test]
    fn test_emit_with_subscriber() {
        let bridge = InMemoryHostBridge::new();
        let (seen, callback) = recorder();
        bridge.subscribe(callback);

        let receivers = bridge.emit(Envelope::new("MINING", Some(json!({}))));

        assert_eq!(receivers, 1);
        assert_eq!(*seen.lock(), vec!["MINING".to_string()]);
    }

    #[test]
    fn test_delivery_in_subscription_order() {
        let bridge = InMemoryHostBridge::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for id in 0..3 {
            let order = Arc::clone(&order);
            bridge.subscribe(Arc::new(move |_env: Envelope| order.lock().push(id)));
        }

        assert_eq!(bridge.emit(Envelope::new("inited", None)), 3);
        assert_eq!(*order.lock(), vec![0, 1, 2]);
        assert_eq!(bridge.subscriber_count(), 3);
    }

    #[test]
    fn test_callback_may_subscribe_during_delivery() {
        let bridge = Arc::new(InMemoryHostBridge::new());
        let inner = Arc::clone(&bridge);
        bridge.subscribe(Arc::new(move |_env: Envelope| {
            inner.subscribe(Arc::new(|_env: Envelope| {}));
        }));

        assert_eq!(bridge.emit(Envelope::new("inited", None)), 1);
        assert_eq!(bridge.subscriber_count(), 2);
    }

    #[test]
    fn test_emit_json_rejects_garbage() {
        let bridge = InMemoryHostBridge::new();
        assert!(matches!(
            bridge.emit_json("not json"),
            Err(BridgeError::Decode(_))
        ));
        assert_eq!(bridge.events_emitted(), 0);
    }

    #[test]
    fn test_emit_json_passes_unknown_tags_through() {
        let bridge = InMemoryHostBridge::new();
        let (seen, callback) = recorder();
        bridge.subscribe(callback);

        let receivers = bridge.emit_json(r#"{"event":"UNKNOWN_TAG_X"}"#).unwrap();
        assert_eq!(receivers, 1);
        assert_eq!(*seen.lock(), vec!["UNKNOWN_TAG_X".to_string()]);
    }

    #[test]
    fn test_debug_endpoint_stored() {
        let bridge = InMemoryHostBridge::default();
        assert!(bridge.debug_endpoint().is_none());

        bridge.set_debug_endpoint(DebugEndpoint::default());
        assert_eq!(bridge.debug_endpoint(), Some(DebugEndpoint::default()));
    }
}
