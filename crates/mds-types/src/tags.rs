//! # Event Tags
//!
//! The discriminant strings the host bridge puts in an envelope's `event`
//! field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DecodeError;

/// Every event tag understood by the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTag {
    // =========================================================================
    // APPLICATION EVENTS (routed to registered handlers)
    // =========================================================================
    /// The bridge finished connecting.
    #[serde(rename = "inited")]
    Inited,
    /// A new block was added to the chain.
    #[serde(rename = "NEWBLOCK")]
    NewBlock,
    /// The node started or stopped mining a transaction.
    #[serde(rename = "MINING")]
    Mining,
    /// A Maxima peer message arrived.
    #[serde(rename = "MAXIMA")]
    Maxima,
    /// The wallet balance changed.
    #[serde(rename = "NEWBALANCE")]
    NewBalance,
    /// A node log line.
    #[serde(rename = "MINIMALOG")]
    MinimaLog,

    // =========================================================================
    // HOST-RESERVED EVENTS (accepted, never routed)
    // =========================================================================
    /// Ten second timer tick.
    #[serde(rename = "MDS_TIMER_10SECONDS")]
    Timer10Seconds,
    /// Sixty second timer tick.
    #[serde(rename = "MDS_TIMER_60SECONDS")]
    Timer60Seconds,
    /// One hour timer tick.
    #[serde(rename = "MDS_TIMER_1HOUR")]
    Timer1Hour,
    /// Maxima peer host list refresh.
    #[serde(rename = "MAXIMAHOSTS")]
    MaximaHosts,
    /// A command is waiting for user approval in the host.
    #[serde(rename = "MDS_PENDING")]
    Pending,
    /// Message between MiniDapps on the same node.
    #[serde(rename = "MDSCOMMS")]
    Comms,
    /// The node is shutting down.
    #[serde(rename = "MDS_SHUTDOWN")]
    Shutdown,
    /// The host came back from the background.
    #[serde(rename = "MDS_RESUMED")]
    Resumed,
}

impl EventTag {
    /// All tags, application tags first.
    pub const ALL: [EventTag; 14] = [
        Self::Inited,
        Self::NewBlock,
        Self::Mining,
        Self::Maxima,
        Self::NewBalance,
        Self::MinimaLog,
        Self::Timer10Seconds,
        Self::Timer60Seconds,
        Self::Timer1Hour,
        Self::MaximaHosts,
        Self::Pending,
        Self::Comms,
        Self::Shutdown,
        Self::Resumed,
    ];

    /// The wire string for this tag.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inited => "inited",
            Self::NewBlock => "NEWBLOCK",
            Self::Mining => "MINING",
            Self::Maxima => "MAXIMA",
            Self::NewBalance => "NEWBALANCE",
            Self::MinimaLog => "MINIMALOG",
            Self::Timer10Seconds => "MDS_TIMER_10SECONDS",
            Self::Timer60Seconds => "MDS_TIMER_60SECONDS",
            Self::Timer1Hour => "MDS_TIMER_1HOUR",
            Self::MaximaHosts => "MAXIMAHOSTS",
            Self::Pending => "MDS_PENDING",
            Self::Comms => "MDSCOMMS",
            Self::Shutdown => "MDS_SHUTDOWN",
            Self::Resumed => "MDS_RESUMED",
        }
    }

    /// Host-reserved tags are accepted but never handed to application code.
    #[must_use]
    pub fn is_host_reserved(&self) -> bool {
        !matches!(
            self,
            Self::Inited
                | Self::NewBlock
                | Self::Mining
                | Self::Maxima
                | Self::NewBalance
                | Self::MinimaLog
        )
    }
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventTag {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| DecodeError::UnknownTag(s.to_string()))
    }
}

/// Period of a host timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerInterval {
    TenSeconds,
    SixtySeconds,
    OneHour,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_tag() {
        for tag in EventTag::ALL {
            assert_eq!(tag.as_str().parse::<EventTag>(), Ok(tag));
        }
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert_eq!(
            "newblock".parse::<EventTag>(),
            Err(DecodeError::UnknownTag("newblock".to_string()))
        );
        assert!("INITED".parse::<EventTag>().is_err());
    }

    #[test]
    fn test_host_reserved_split() {
        let reserved: Vec<_> = EventTag::ALL
            .iter()
            .filter(|t| t.is_host_reserved())
            .collect();
        assert_eq!(reserved.len(), 8);
        assert!(EventTag::Shutdown.is_host_reserved());
        assert_eq!("MDSCOMMS".parse::<EventTag>(), Ok(EventTag::Comms));
        assert!(!EventTag::Inited.is_host_reserved());
        assert!(!EventTag::MinimaLog.is_host_reserved());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&EventTag::NewBalance).unwrap();
        assert_eq!(json, "\"NEWBALANCE\"");
    }
}
