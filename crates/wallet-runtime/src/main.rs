//! # Wallet Runtime
//!
//! Reads newline-delimited host envelopes from stdin and feeds them to the
//! wallet's event notifier.
//!
//! ```text
//! $ printf '{"event":"inited"}\n{"event":"NEWBLOCK","data":{"txpow":{}}}\n' | wallet-runtime
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing::info;

use mds_bridge::{pump_lines, InMemoryHostBridge};
use wallet_events::EventNotifier;
use wallet_runtime::{RuntimeConfig, WalletMonitor};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = RuntimeConfig::from_env().context("Failed to load configuration")?;

    // Initialize logging
    wallet_telemetry::init_logging(&config.telemetry).context("Failed to initialize logging")?;

    let bridge = Arc::new(InMemoryHostBridge::new());
    let notifier = EventNotifier::new(bridge.clone(), config.notifier.clone());
    let monitor = Arc::new(WalletMonitor::new());
    monitor.attach(&notifier);

    info!("Reading envelopes from stdin. Press Ctrl+C to stop.");
    let stdin = BufReader::new(tokio::io::stdin());

    tokio::select! {
        result = pump_lines(stdin, &bridge) => {
            let stats = result.context("Envelope stream failed")?;
            info!(
                lines = stats.lines,
                emitted = stats.emitted,
                rejected = stats.rejected,
                "Input closed"
            );
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl+C")?;
            info!("Shutdown signal received");
        }
    }

    let snapshot = monitor.snapshot();
    let metrics = notifier.metrics();
    info!(
        connected = snapshot.connected,
        tip_block = ?snapshot.tip_block,
        tip_txpowid = ?snapshot.tip_txpowid,
        mining = snapshot.mining,
        blocks = snapshot.blocks_seen,
        balance_changes = snapshot.balance_changes,
        maxima_messages = snapshot.maxima_messages,
        last_log = ?snapshot.last_log,
        "Final wallet status"
    );
    info!(
        received = metrics.received,
        delivered = metrics.delivered,
        ignored = metrics.ignored,
        rejected = metrics.rejected(),
        "Dispatch totals"
    );

    Ok(())
}
