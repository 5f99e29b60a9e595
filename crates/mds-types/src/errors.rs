//! # Error Types
//!
//! Errors raised while turning a wire envelope into a `NodeEvent`.

use thiserror::Error;

use crate::tags::EventTag;

/// Errors that can occur while decoding an envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Tag outside the set this workspace understands.
    #[error("Unknown event type: {0}")]
    UnknownTag(String),

    /// Known tag, but the payload does not have that tag's shape.
    #[error("Malformed {tag} payload: {reason}")]
    MalformedPayload { tag: EventTag, reason: String },

    /// The envelope itself is not valid JSON or lacks an `event` field.
    #[error("Invalid envelope: {0}")]
    InvalidEnvelope(String),
}

impl DecodeError {
    /// The tag the failure relates to, if one was recognised.
    #[must_use]
    pub fn tag(&self) -> Option<EventTag> {
        match self {
            Self::MalformedPayload { tag, .. } => Some(*tag),
            Self::UnknownTag(_) | Self::InvalidEnvelope(_) => None,
        }
    }
}
