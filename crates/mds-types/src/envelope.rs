//! # Event Envelope
//!
//! The host bridge pushes each event as `{"event": "<TAG>", "data": ...}`.
//! `Envelope` is that wire form; `NodeEvent` is the decoded form with one
//! variant per tag.
//!
//! Envelopes are transient: the bridge builds one per event, the notifier
//! decodes it once and drops it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::{MaximaData, MiningData, MinimaLogData, NewBalanceData, NewBlockData};
use crate::errors::DecodeError;
use crate::tags::{EventTag, TimerInterval};

/// One event as pushed by the host bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Discriminant tag. Also accepted under the key `tag`.
    #[serde(alias = "tag")]
    pub event: String,

    /// Tag-specific payload. `null` and absent are the same.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    /// Build an envelope from a tag string and optional payload.
    pub fn new(event: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            event: event.into(),
            data,
        }
    }

    /// Parse one envelope from its JSON text.
    pub fn from_json(raw: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(raw).map_err(|e| DecodeError::InvalidEnvelope(e.to_string()))
    }

    /// Classify the tag without touching the payload.
    pub fn tag(&self) -> Result<EventTag, DecodeError> {
        self.event.parse()
    }

    /// Decode into the tag-indexed form.
    ///
    /// # Errors
    ///
    /// - `UnknownTag` when the tag is outside the closed set
    /// - `MalformedPayload` when the payload does not match the tag's shape
    pub fn decode(self) -> Result<NodeEvent, DecodeError> {
        let tag = self.tag()?;
        let event = match tag {
            EventTag::Inited => NodeEvent::Inited,
            EventTag::NewBlock => NodeEvent::NewBlock(payload(tag, self.data)?),
            EventTag::Mining => NodeEvent::Mining(payload(tag, self.data)?),
            EventTag::Maxima => NodeEvent::Maxima(payload(tag, self.data)?),
            EventTag::NewBalance => match self.data {
                Some(data) => NodeEvent::NewBalance(payload(tag, Some(data))?),
                None => NodeEvent::NewBalance(NewBalanceData::default()),
            },
            EventTag::MinimaLog => NodeEvent::MinimaLog(payload(tag, self.data)?),
            EventTag::Timer10Seconds => NodeEvent::TimerTick(TimerInterval::TenSeconds),
            EventTag::Timer60Seconds => NodeEvent::TimerTick(TimerInterval::SixtySeconds),
            EventTag::Timer1Hour => NodeEvent::TimerTick(TimerInterval::OneHour),
            EventTag::MaximaHosts => NodeEvent::MaximaHosts(self.data.unwrap_or(Value::Null)),
            EventTag::Pending => NodeEvent::Pending(self.data.unwrap_or(Value::Null)),
            EventTag::Comms => NodeEvent::Comms(self.data.unwrap_or(Value::Null)),
            EventTag::Shutdown => NodeEvent::Shutdown,
            EventTag::Resumed => NodeEvent::Resumed,
        };
        Ok(event)
    }
}

fn payload<T: DeserializeOwned>(tag: EventTag, data: Option<Value>) -> Result<T, DecodeError> {
    let data = data.ok_or_else(|| DecodeError::MalformedPayload {
        tag,
        reason: "missing data".to_string(),
    })?;
    serde_json::from_value(data).map_err(|e| DecodeError::MalformedPayload {
        tag,
        reason: e.to_string(),
    })
}

/// A decoded node event.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeEvent {
    Inited,
    NewBlock(NewBlockData),
    Mining(MiningData),
    Maxima(MaximaData),
    NewBalance(NewBalanceData),
    MinimaLog(MinimaLogData),
    /// Host timer tick.
    TimerTick(TimerInterval),
    /// Maxima host list refresh, payload kept raw.
    MaximaHosts(Value),
    /// Pending command notice, payload kept raw.
    Pending(Value),
    /// MiniDapp-to-MiniDapp message, payload kept raw.
    Comms(Value),
    Shutdown,
    Resumed,
}

impl NodeEvent {
    /// The tag this event travels under.
    #[must_use]
    pub fn tag(&self) -> EventTag {
        match self {
            Self::Inited => EventTag::Inited,
            Self::NewBlock(_) => EventTag::NewBlock,
            Self::Mining(_) => EventTag::Mining,
            Self::Maxima(_) => EventTag::Maxima,
            Self::NewBalance(_) => EventTag::NewBalance,
            Self::MinimaLog(_) => EventTag::MinimaLog,
            Self::TimerTick(TimerInterval::TenSeconds) => EventTag::Timer10Seconds,
            Self::TimerTick(TimerInterval::SixtySeconds) => EventTag::Timer60Seconds,
            Self::TimerTick(TimerInterval::OneHour) => EventTag::Timer1Hour,
            Self::MaximaHosts(_) => EventTag::MaximaHosts,
            Self::Pending(_) => EventTag::Pending,
            Self::Comms(_) => EventTag::Comms,
            Self::Shutdown => EventTag::Shutdown,
            Self::Resumed => EventTag::Resumed,
        }
    }
}

impl From<NodeEvent> for Envelope {
    fn from(event: NodeEvent) -> Self {
        let tag = event.tag();
        let data = match event {
            NodeEvent::Inited
            | NodeEvent::TimerTick(_)
            | NodeEvent::Shutdown
            | NodeEvent::Resumed => None,
            NodeEvent::NewBlock(d) => serde_json::to_value(d).ok(),
            NodeEvent::Mining(d) => serde_json::to_value(d).ok(),
            NodeEvent::Maxima(d) => serde_json::to_value(d).ok(),
            NodeEvent::NewBalance(d) => serde_json::to_value(d).ok(),
            NodeEvent::MinimaLog(d) => serde_json::to_value(d).ok(),
            NodeEvent::MaximaHosts(v) | NodeEvent::Pending(v) | NodeEvent::Comms(v) => Some(v),
        };
        Envelope::new(tag.as_str(), data)
    }
}
