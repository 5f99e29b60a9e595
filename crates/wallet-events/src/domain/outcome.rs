//! Result of dispatching one envelope.

use mds_types::EventTag;

/// What the notifier did with an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The bound handler (registered or default) ran to completion.
    Delivered(EventTag),
    /// Host-reserved tag; accepted and dropped without a report.
    Ignored(EventTag),
    /// Tag outside the known set; reported and dropped.
    Unrecognized(String),
    /// Known tag with a payload of the wrong shape; reported and dropped.
    Malformed(EventTag),
    /// The handler panicked; the panic was caught and reported.
    HandlerPanicked(EventTag),
}

impl DispatchOutcome {
    /// Whether an application handler was invoked.
    #[must_use]
    pub fn invoked_handler(&self) -> bool {
        matches!(self, Self::Delivered(_) | Self::HandlerPanicked(_))
    }
}
