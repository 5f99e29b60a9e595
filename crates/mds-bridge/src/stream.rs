//! # Line Pump
//!
//! Feeds newline-delimited JSON envelopes from an async reader into an
//! `InMemoryHostBridge`.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::error::BridgeError;
use crate::in_memory::InMemoryHostBridge;

/// Counters for one pump run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpStats {
    /// Non-blank lines read.
    pub lines: u64,
    /// Lines emitted as envelopes.
    pub emitted: u64,
    /// Lines that were not valid envelopes.
    pub rejected: u64,
}

/// Read envelopes until EOF.
///
/// Blank lines are skipped. Lines that do not parse are reported and
/// skipped; only a reader failure stops the pump.
pub async fn pump_lines<R>(reader: R, bridge: &InMemoryHostBridge) -> Result<PumpStats, BridgeError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut stats = PumpStats::default();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| BridgeError::Io(e.to_string()))?
    {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        stats.lines += 1;

        match bridge.emit_json(trimmed) {
            Ok(_) => stats.emitted += 1,
            Err(e) => {
                warn!(line = stats.lines, error = %e, "Rejected envelope line");
                stats.rejected += 1;
            }
        }
    }

    debug!(
        lines = stats.lines,
        emitted = stats.emitted,
        rejected = stats.rejected,
        "Envelope stream ended"
    );
    Ok(stats)
}
