//! Domain Layer
//!
//! Callback bindings, dispatch outcomes and configuration. Nothing here
//! touches the bridge.

pub mod bindings;
pub mod config;
pub mod outcome;

pub use bindings::{CallbackBindings, EventHandler, Handler, InitHandler};
pub use config::NotifierConfig;
pub use outcome::DispatchOutcome;
