//! Debug endpoint configuration.

use std::fmt;

/// Development node the bridge talks to when not hosted by the node itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugEndpoint {
    /// Node host address.
    pub host: String,
    /// MDS port on the node.
    pub port: u16,
    /// Id the node assigned to this MiniDapp.
    pub minidapp_id: String,
}

impl DebugEndpoint {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 9003;
    pub const DEFAULT_MINIDAPP_ID: &'static str =
        "0x2F66519D7AA6F5445E966A2883A551E75C34C88FD015C1F7BD3647AD42B4BA6F";

    /// `host:port` form.
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for DebugEndpoint {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            minidapp_id: Self::DEFAULT_MINIDAPP_ID.to_string(),
        }
    }
}

impl fmt::Display for DebugEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.address(), self.minidapp_id)
    }
}
