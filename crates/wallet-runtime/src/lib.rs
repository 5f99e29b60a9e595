//! # Wallet Runtime
//!
//! Wires the wallet together for a standalone process.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Initialize logging
//! 3. Build the host bridge and the event notifier
//! 4. Attach the wallet monitor (registers handlers, then `on_init`)
//! 5. Pump newline-delimited envelopes from stdin until EOF or Ctrl+C
//!
//! ```text
//! stdin ──lines──→ InMemoryHostBridge ──Envelope──→ EventNotifier
//!                                                        │
//!                                                        ↓
//!                                                  WalletMonitor
//! ```

pub mod config;
pub mod monitor;

pub use config::{ConfigError, RuntimeConfig};
pub use monitor::{WalletMonitor, WalletSnapshot};
