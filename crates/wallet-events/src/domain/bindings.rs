//! # Callback Bindings
//!
//! The table from application tag to its single active handler.
//!
//! Binding overwrites: registering for a tag replaces whatever was bound
//! before. Every tag starts bound to a silent default.

use std::fmt;
use std::sync::Arc;

use mds_types::{
    EventTag, MaximaData, MiningData, MinimaLogData, NewBalanceData, NewBlockData,
};
use tracing::{debug, info};

/// Handler for a tag carrying payload `P`.
pub type Handler<P> = Arc<dyn Fn(P) + Send + Sync>;

/// Handler for `inited`, which carries no payload.
pub type InitHandler = Arc<dyn Fn() + Send + Sync>;

/// A handler paired with the tag it serves.
///
/// The payload type is fixed by the variant, so a handler cannot be bound to
/// a tag whose payload it does not accept.
#[derive(Clone)]
pub enum EventHandler {
    Inited(InitHandler),
    NewBlock(Handler<NewBlockData>),
    Mining(Handler<MiningData>),
    Maxima(Handler<MaximaData>),
    NewBalance(Handler<NewBalanceData>),
    MinimaLog(Handler<MinimaLogData>),
}

impl EventHandler {
    pub fn inited(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self::Inited(Arc::new(f))
    }

    pub fn new_block(f: impl Fn(NewBlockData) + Send + Sync + 'static) -> Self {
        Self::NewBlock(Arc::new(f))
    }

    pub fn mining(f: impl Fn(MiningData) + Send + Sync + 'static) -> Self {
        Self::Mining(Arc::new(f))
    }

    pub fn maxima(f: impl Fn(MaximaData) + Send + Sync + 'static) -> Self {
        Self::Maxima(Arc::new(f))
    }

    pub fn new_balance(f: impl Fn(NewBalanceData) + Send + Sync + 'static) -> Self {
        Self::NewBalance(Arc::new(f))
    }

    pub fn minima_log(f: impl Fn(MinimaLogData) + Send + Sync + 'static) -> Self {
        Self::MinimaLog(Arc::new(f))
    }

    /// The tag this handler is bound under.
    #[must_use]
    pub fn tag(&self) -> EventTag {
        match self {
            Self::Inited(_) => EventTag::Inited,
            Self::NewBlock(_) => EventTag::NewBlock,
            Self::Mining(_) => EventTag::Mining,
            Self::Maxima(_) => EventTag::Maxima,
            Self::NewBalance(_) => EventTag::NewBalance,
            Self::MinimaLog(_) => EventTag::MinimaLog,
        }
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventHandler").field(&self.tag()).finish()
    }
}

/// Current handler per application tag.
#[derive(Clone)]
pub struct CallbackBindings {
    pub(crate) inited: InitHandler,
    pub(crate) new_block: Handler<NewBlockData>,
    pub(crate) mining: Handler<MiningData>,
    pub(crate) maxima: Handler<MaximaData>,
    pub(crate) new_balance: Handler<NewBalanceData>,
    pub(crate) minima_log: Handler<MinimaLogData>,
}

impl Default for CallbackBindings {
    fn default() -> Self {
        Self {
            inited: Arc::new(|| {
                info!("INIT event received, register a handler with on_init");
            }),
            new_block: Arc::new(|_: NewBlockData| {}),
            mining: Arc::new(|_: MiningData| {}),
            maxima: Arc::new(|_: MaximaData| {}),
            new_balance: Arc::new(|_: NewBalanceData| {}),
            minima_log: Arc::new(|data: MinimaLogData| {
                debug!(message = %data.message, "MINIMALOG");
            }),
        }
    }
}

impl CallbackBindings {
    /// Replace the binding for the handler's tag.
    pub fn bind(&mut self, handler: EventHandler) {
        match handler {
            EventHandler::Inited(h) => self.inited = h,
            EventHandler::NewBlock(h) => self.new_block = h,
            EventHandler::Mining(h) => self.mining = h,
            EventHandler::Maxima(h) => self.maxima = h,
            EventHandler::NewBalance(h) => self.new_balance = h,
            EventHandler::MinimaLog(h) => self.minima_log = h,
        }
    }
}

impl fmt::Debug for CallbackBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackBindings").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_handler_tags() {
        assert_eq!(EventHandler::inited(|| {}).tag(), EventTag::Inited);
        assert_eq!(EventHandler::new_block(|_| {}).tag(), EventTag::NewBlock);
        assert_eq!(EventHandler::mining(|_| {}).tag(), EventTag::Mining);
        assert_eq!(EventHandler::maxima(|_| {}).tag(), EventTag::Maxima);
        assert_eq!(EventHandler::new_balance(|_| {}).tag(), EventTag::NewBalance);
        assert_eq!(EventHandler::minima_log(|_| {}).tag(), EventTag::MinimaLog);
    }

    #[test]
    fn test_bind_replaces_only_its_tag() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut bindings = CallbackBindings::default();

        bindings.bind(EventHandler::mining(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        (bindings.mining)(MiningData::default());
        (bindings.new_block)(NewBlockData::default());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_defaults_are_callable() {
        let bindings = CallbackBindings::default();
        (bindings.inited)();
        (bindings.minima_log)(MinimaLogData {
            message: "hello".to_string(),
            ..MinimaLogData::default()
        });
        (bindings.new_balance)(NewBalanceData::default());
    }
}
