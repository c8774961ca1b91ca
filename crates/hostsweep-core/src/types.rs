//! Probe data model.

use std::fmt;

use reqwest::Url;
use serde::Serialize;

/// Default HTTP port probed when a target carries no explicit port
pub const DEFAULT_PORT: u16 = 80;

/// A single address to probe.
///
/// The path is always `/`; the port defaults to 80.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProbeTarget {
    address: String,
    port: u16,
}

impl ProbeTarget {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port: DEFAULT_PORT,
        }
    }

    pub fn with_port(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// URL requested for this target.
    pub fn url(&self) -> String {
        if self.port == DEFAULT_PORT {
            format!("http://{}/", self.address)
        } else {
            format!("http://{}:{}/", self.address, self.port)
        }
    }

    /// Parsed request URL, or `None` when the address is not a bare host.
    ///
    /// The address must not smuggle in a path, userinfo, query, fragment or
    /// a port other than the target's own.
    pub fn request_url(&self) -> Option<Url> {
        let url = Url::parse(&self.url()).ok()?;

        let bare = url.scheme() == "http"
            && url.host_str().is_some_and(|h| !h.is_empty())
            && url.username().is_empty()
            && url.password().is_none()
            && url.path() == "/"
            && url.query().is_none()
            && url.fragment().is_none()
            && url.port_or_known_default() == Some(self.port);

        bare.then_some(url)
    }
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.port == DEFAULT_PORT {
            write!(f, "{}", self.address)
        } else {
            write!(f, "{}:{}", self.address, self.port)
        }
    }
}

impl From<&str> for ProbeTarget {
    fn from(address: &str) -> Self {
        Self::new(address)
    }
}

impl From<String> for ProbeTarget {
    fn from(address: String) -> Self {
        Self::new(address)
    }
}

/// Outcome of one probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProbeStatus {
    /// A 2xx status arrived before the deadline, or the request was rejected
    /// by a cross-origin policy
    #[serde(rename = "responded")]
    Responded,
    /// Non-2xx status or a transport failure before the deadline
    #[serde(rename = "no response")]
    NoResponse,
    /// The deadline elapsed first
    #[serde(rename = "timeout")]
    Timeout,
}

impl ProbeStatus {
    /// Classify an HTTP status code. Only the half-open range [200, 300) counts.
    pub fn from_status_code(code: u16) -> Self {
        if (200..300).contains(&code) {
            ProbeStatus::Responded
        } else {
            ProbeStatus::NoResponse
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeStatus::Responded => "responded",
            ProbeStatus::NoResponse => "no response",
            ProbeStatus::Timeout => "timeout",
        }
    }

    pub fn is_responded(&self) -> bool {
        matches!(self, ProbeStatus::Responded)
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of probing one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub target: ProbeTarget,
    pub status: ProbeStatus,
}

impl ProbeResult {
    pub fn new(target: ProbeTarget, status: ProbeStatus) -> Self {
        Self { target, status }
    }
}
