//! # Event Notifier
//!
//! Bridges the host's single push-style event source to per-tag wallet
//! handlers.
//!
//! ## Connection
//!
//! `on_init` (or `connect`) subscribes one callback to the bridge. Later
//! calls rebind the `inited` handler but keep the existing subscription, so
//! every envelope reaches dispatch exactly once.
//!
//! ## Locking
//!
//! Bindings sit behind a `RwLock`. Dispatch clones the one handler it needs
//! under the read lock and runs it after the lock is released, so a handler
//! may register handlers itself.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use mds_bridge::HostBridge;
use mds_types::{
    DecodeError, Envelope, MaximaData, MiningData, MinimaLogData, NewBalanceData, NewBlockData,
    NodeEvent,
};
use parking_lot::RwLock;
use tracing::{debug, debug_span, error, info, warn};

use crate::domain::{CallbackBindings, DispatchOutcome, EventHandler, NotifierConfig};
use crate::metrics::{DispatchMetrics, MetricsSnapshot};

/// The part of the notifier the bridge callback holds on to.
struct Dispatcher {
    bindings: RwLock<CallbackBindings>,
    metrics: DispatchMetrics,
    isolate_handler_panics: bool,
}

impl Dispatcher {
    fn dispatch(&self, envelope: Envelope) -> DispatchOutcome {
        let _span = debug_span!("dispatch", event = %envelope.event).entered();
        let outcome = self.route(envelope);
        self.metrics.record(&outcome);
        outcome
    }

    fn route(&self, envelope: Envelope) -> DispatchOutcome {
        let raw_tag = envelope.event.clone();
        let event = match envelope.decode() {
            Ok(event) => event,
            Err(DecodeError::MalformedPayload { tag, reason }) => {
                warn!(event = %tag, reason = %reason, "Malformed event payload dropped");
                return DispatchOutcome::Malformed(tag);
            }
            Err(e) => {
                warn!(event = %raw_tag, error = %e, "Unknown event type");
                return DispatchOutcome::Unrecognized(raw_tag);
            }
        };

        let tag = event.tag();
        let invoke: Box<dyn FnOnce()> = {
            let bindings = self.bindings.read();
            match event {
                NodeEvent::Inited => {
                    let handler = Arc::clone(&bindings.inited);
                    Box::new(move || handler())
                }
                NodeEvent::NewBlock(data) => {
                    let handler = Arc::clone(&bindings.new_block);
                    Box::new(move || handler(data))
                }
                NodeEvent::Mining(data) => {
                    let handler = Arc::clone(&bindings.mining);
                    Box::new(move || handler(data))
                }
                NodeEvent::Maxima(data) => {
                    let handler = Arc::clone(&bindings.maxima);
                    Box::new(move || handler(data))
                }
                NodeEvent::NewBalance(data) => {
                    let handler = Arc::clone(&bindings.new_balance);
                    Box::new(move || handler(data))
                }
                NodeEvent::MinimaLog(data) => {
                    let handler = Arc::clone(&bindings.minima_log);
                    Box::new(move || handler(data))
                }
                NodeEvent::TimerTick(_)
                | NodeEvent::MaximaHosts(_)
                | NodeEvent::Pending(_)
                | NodeEvent::Comms(_)
                | NodeEvent::Shutdown
                | NodeEvent::Resumed => {
                    debug!(event = %tag, "Host-reserved event ignored");
                    return DispatchOutcome::Ignored(tag);
                }
            }
        };

        if !self.isolate_handler_panics {
            invoke();
            return DispatchOutcome::Delivered(tag);
        }

        match panic::catch_unwind(AssertUnwindSafe(invoke)) {
            Ok(()) => DispatchOutcome::Delivered(tag),
            Err(payload) => {
                error!(
                    event = %tag,
                    panic = %panic_message(payload.as_ref()),
                    "Event handler panicked"
                );
                DispatchOutcome::HandlerPanicked(tag)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Routes host bridge envelopes to the handler bound for each tag.
///
/// One instance per application. Handlers start as silent defaults and are
/// replaced through `register` or the `on_*` functions.
pub struct EventNotifier {
    dispatcher: Arc<Dispatcher>,
    bridge: Arc<dyn HostBridge>,
    config: NotifierConfig,
    connected: AtomicBool,
}

impl EventNotifier {
    /// Create a notifier over a bridge. Nothing is subscribed until
    /// `on_init` or `connect`.
    pub fn new(bridge: Arc<dyn HostBridge>, config: NotifierConfig) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher {
                bindings: RwLock::new(CallbackBindings::default()),
                metrics: DispatchMetrics::new(),
                isolate_handler_panics: config.isolate_handler_panics,
            }),
            bridge,
            config,
            connected: AtomicBool::new(false),
        }
    }

    /// Replace the handler bound to the handler's tag.
    ///
    /// Takes effect for the next envelope dispatched.
    pub fn register(&self, handler: EventHandler) {
        let tag = handler.tag();
        self.dispatcher.bindings.write().bind(handler);
        debug!(event = %tag, "Handler registered");
    }

    /// Bind the `inited` handler, then connect to the bridge.
    pub fn register_init(&self, handler: impl Fn() + Send + Sync + 'static) {
        self.register(EventHandler::inited(handler));
        self.connect();
    }

    /// Subscribe to the bridge, once.
    ///
    /// Sets the debug endpoint first when configured. Repeated calls are
    /// no-ops.
    pub fn connect(&self) {
        if self.connected.swap(true, Ordering::SeqCst) {
            debug!("Host bridge already connected, keeping existing subscription");
            return;
        }

        if let Some(endpoint) = &self.config.debug_endpoint {
            self.bridge.set_debug_endpoint(endpoint.clone());
        }

        let dispatcher = Arc::clone(&self.dispatcher);
        self.bridge.subscribe(Arc::new(move |envelope: Envelope| {
            dispatcher.dispatch(envelope);
        }));

        info!(
            debug_mode = self.config.debug_endpoint.is_some(),
            "Subscribed to host bridge"
        );
    }

    /// Dispatch one envelope as if the bridge had delivered it.
    pub fn dispatch(&self, envelope: Envelope) -> DispatchOutcome {
        self.dispatcher.dispatch(envelope)
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn metrics(&self) -> MetricsSnapshot {
        self.dispatcher.metrics.snapshot()
    }

    #[must_use]
    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    // =========================================================================
    // REGISTRATION FUNCTIONS (one per application tag)
    // =========================================================================

    pub fn on_init(&self, handler: impl Fn() + Send + Sync + 'static) {
        self.register_init(handler);
    }

    pub fn on_new_block(&self, handler: impl Fn(NewBlockData) + Send + Sync + 'static) {
        self.register(EventHandler::new_block(handler));
    }

    pub fn on_mining(&self, handler: impl Fn(MiningData) + Send + Sync + 'static) {
        self.register(EventHandler::mining(handler));
    }

    pub fn on_maxima(&self, handler: impl Fn(MaximaData) + Send + Sync + 'static) {
        self.register(EventHandler::maxima(handler));
    }

    pub fn on_new_balance(&self, handler: impl Fn(NewBalanceData) + Send + Sync + 'static) {
        self.register(EventHandler::new_balance(handler));
    }

    pub fn on_minima_log(&self, handler: impl Fn(MinimaLogData) + Send + Sync + 'static) {
        self.register(EventHandler::minima_log(handler));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mds_bridge::{DebugEndpoint, EnvelopeCallback};
    use mds_types::EventTag;
    use parking_lot::Mutex;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;

    /// Bridge that only records what the notifier asked of it.
    #[derive(Default)]
    struct RecordingBridge {
        subscriptions: Mutex<Vec<EnvelopeCallback>>,
        endpoint: Mutex<Option<DebugEndpoint>>,
    }

    impl HostBridge for RecordingBridge {
        fn set_debug_endpoint(&self, endpoint: DebugEndpoint) {
            *self.endpoint.lock() = Some(endpoint);
        }

        fn subscribe(&self, callback: EnvelopeCallback) {
            self.subscriptions.lock().push(callback);
        }
    }

    fn notifier() -> (Arc<RecordingBridge>, EventNotifier) {
        let bridge = Arc::new(RecordingBridge::default());
        let notifier = EventNotifier::new(bridge.clone(), NotifierConfig::default());
        (bridge, notifier)
    }

    #[test]
    fn test_not_connected_until_init() {
        let (bridge, notifier) = notifier();
        notifier.on_new_block(|_| {});
        assert!(!notifier.is_connected());
        assert!(bridge.subscriptions.lock().is_empty());

        notifier.on_init(|| {});
        assert!(notifier.is_connected());
        assert_eq!(bridge.subscriptions.lock().len(), 1);
    }

    #[test]
    fn test_connect_is_idempotent() {
        let (bridge, notifier) = notifier();
        notifier.connect();
        notifier.connect();
        notifier.on_init(|| {});
        assert_eq!(bridge.subscriptions.lock().len(), 1);
    }

    #[test]
    fn test_debug_endpoint_set_before_subscribe() {
        let bridge = Arc::new(RecordingBridge::default());
        let notifier = EventNotifier::new(bridge.clone(), NotifierConfig::development());
        notifier.connect();
        assert_eq!(*bridge.endpoint.lock(), Some(DebugEndpoint::default()));
    }

    #[test]
    fn test_production_leaves_endpoint_unset() {
        let (bridge, notifier) = notifier();
        notifier.connect();
        assert!(bridge.endpoint.lock().is_none());
    }

    #[test]
    fn test_subscribed_callback_dispatches() {
        let (bridge, notifier) = notifier();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        notifier.on_mining(move |data| {
            assert!(data.mining);
            counter.fetch_add(1, Ordering::SeqCst);
        });
        notifier.connect();

        let callback = Arc::clone(&bridge.subscriptions.lock()[0]);
        callback(Envelope::new(
            "MINING",
            Some(json!({ "mining": true, "txpow": {} })),
        ));

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.metrics().delivered, 1);
    }

    #[test]
    fn test_handler_may_register_during_dispatch() {
        let (_bridge, notifier) = notifier();
        let notifier = Arc::new(notifier);
        let inner = Arc::clone(&notifier);
        notifier.on_new_balance(move |_| {
            inner.on_new_balance(|_| {});
        });

        let outcome = notifier.dispatch(Envelope::new("NEWBALANCE", None));
        assert_eq!(outcome, DispatchOutcome::Delivered(EventTag::NewBalance));
    }

    #[test]
    fn test_panics_propagate_when_isolation_disabled() {
        let bridge = Arc::new(RecordingBridge::default());
        let config = NotifierConfig {
            isolate_handler_panics: false,
            ..NotifierConfig::default()
        };
        let notifier = EventNotifier::new(bridge, config);
        notifier.on_minima_log(|_| panic!("handler failure"));

        let log = || Envelope::new("MINIMALOG", Some(json!({ "message": "boom" })));
        let result = panic::catch_unwind(AssertUnwindSafe(|| notifier.dispatch(log())));
        assert!(result.is_err());
        assert_eq!(notifier.metrics().handler_panics, 0);

        // Bindings stay usable after the unwind.
        notifier.on_minima_log(|_| {});
        assert_eq!(
            notifier.dispatch(log()),
            DispatchOutcome::Delivered(EventTag::MinimaLog)
        );
    }

    #[test]
    fn test_panic_message_extraction() {
        let err = panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(panic_message(err.as_ref()), "boom");

        let err = panic::catch_unwind(|| panic!("{}", String::from("owned"))).unwrap_err();
        assert_eq!(panic_message(err.as_ref()), "owned");
    }
}
