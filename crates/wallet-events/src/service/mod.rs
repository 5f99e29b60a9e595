//! Service Layer
//!
//! Wires callback bindings to a host bridge.

pub mod notifier;

pub use notifier::EventNotifier;
