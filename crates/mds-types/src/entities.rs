//! # Event Payloads
//!
//! Payload shapes for each application tag, as the node serialises them.
//!
//! The node sends most numbers as strings, so numeric-looking fields stay
//! `String` here. Unread fields are kept in `extra` maps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// TXPOW
// =============================================================================

/// A transaction proof-of-work unit, the node's wrapper for both blocks and
/// transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxPow {
    /// Unique id (hex).
    #[serde(default)]
    pub txpowid: String,
    /// Whether this TxPoW reached block difficulty.
    #[serde(default)]
    pub isblock: bool,
    /// Whether this TxPoW carries a transaction.
    #[serde(default)]
    pub istransaction: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<TxPowHeader>,
    /// Everything else the node sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The subset of the TxPoW header the wallet displays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TxPowHeader {
    /// Block number, decimal string.
    #[serde(default)]
    pub block: String,
    /// Creation time in milliseconds, decimal string.
    #[serde(default)]
    pub timemilli: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TxPow {
    /// Block number parsed from the header, if present and numeric.
    #[must_use]
    pub fn block_number(&self) -> Option<u64> {
        self.header.as_ref()?.block.parse().ok()
    }
}

// =============================================================================
// APPLICATION PAYLOADS
// =============================================================================

/// Payload of `NEWBLOCK`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBlockData {
    pub txpow: TxPow,
    /// Fields the wallet does not read.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `MINING`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiningData {
    /// `true` when mining started, `false` when it finished.
    pub mining: bool,
    pub txpow: TxPow,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `MAXIMA`: one message received over the Maxima peer network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaximaData {
    /// Target application name.
    pub application: String,
    /// Message body (hex).
    pub data: String,
    /// Sender public key.
    pub from: String,
    pub msgid: String,
    pub random: String,
    /// Human readable receive time.
    pub time: String,
    /// Receive time in milliseconds.
    pub timemilli: u64,
    /// Recipient public key.
    pub to: String,
    /// Newer nodes add fields such as `pubkey` and `poll`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `NEWBALANCE`.
///
/// The node attaches no stable fields; whatever arrives is passed through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBalanceData {
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload of `MINIMALOG`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinimaLogData {
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
