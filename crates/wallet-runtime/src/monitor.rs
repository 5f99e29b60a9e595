//! # Wallet Monitor
//!
//! Keeps the wallet status the UI renders, updated by notifier handlers.

use std::sync::Arc;

use mds_types::{MaximaData, MiningData, MinimaLogData, NewBalanceData, NewBlockData};
use parking_lot::RwLock;
use tracing::{debug, info};
use wallet_events::EventNotifier;

/// Point-in-time wallet status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSnapshot {
    /// Set once the host signals `inited`.
    pub connected: bool,
    /// Block number of the latest `NEWBLOCK`, when the header carried one.
    pub tip_block: Option<u64>,
    pub tip_txpowid: Option<String>,
    /// Whether the node is mining a transaction right now.
    pub mining: bool,
    pub blocks_seen: u64,
    pub balance_changes: u64,
    pub maxima_messages: u64,
    pub last_log: Option<String>,
}

/// Wallet state driven by node events.
#[derive(Debug, Default)]
pub struct WalletMonitor {
    state: RwLock<WalletSnapshot>,
}

impl WalletMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for every application tag, then `on_init`.
    ///
    /// `on_init` comes last because it connects the notifier.
    pub fn attach(self: &Arc<Self>, notifier: &EventNotifier) {
        let monitor = Arc::clone(self);
        notifier.on_new_block(move |data| monitor.apply_new_block(data));
        let monitor = Arc::clone(self);
        notifier.on_mining(move |data| monitor.apply_mining(data));
        let monitor = Arc::clone(self);
        notifier.on_maxima(move |data| monitor.apply_maxima(data));
        let monitor = Arc::clone(self);
        notifier.on_new_balance(move |data| monitor.apply_new_balance(data));
        let monitor = Arc::clone(self);
        notifier.on_minima_log(move |data| monitor.apply_minima_log(data));

        let monitor = Arc::clone(self);
        notifier.on_init(move || monitor.apply_inited());
    }

    #[must_use]
    pub fn snapshot(&self) -> WalletSnapshot {
        self.state.read().clone()
    }

    fn apply_inited(&self) {
        self.state.write().connected = true;
        info!("Wallet connected to node");
    }

    fn apply_new_block(&self, data: NewBlockData) {
        let block = data.txpow.block_number();
        {
            let mut state = self.state.write();
            state.blocks_seen += 1;
            if block.is_some() {
                state.tip_block = block;
            }
            state.tip_txpowid = Some(data.txpow.txpowid.clone());
        }
        info!(block = ?block, txpowid = %data.txpow.txpowid, "New block");
    }

    fn apply_mining(&self, data: MiningData) {
        self.state.write().mining = data.mining;
        debug!(mining = data.mining, txpowid = %data.txpow.txpowid, "Mining status");
    }

    fn apply_maxima(&self, data: MaximaData) {
        self.state.write().maxima_messages += 1;
        debug!(
            application = %data.application,
            from = %data.from,
            msgid = %data.msgid,
            "Maxima message"
        );
    }

    fn apply_new_balance(&self, data: NewBalanceData) {
        self.state.write().balance_changes += 1;
        info!(fields = data.extra.len(), "Balance changed");
    }

    fn apply_minima_log(&self, data: MinimaLogData) {
        self.state.write().last_log = Some(data.message);
    }
}
