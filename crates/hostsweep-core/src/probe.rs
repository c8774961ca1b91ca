//! Bounded single-address HTTP probe.
//!
//! A probe races one GET against a deadline and folds every outcome into a
//! [`ProbeStatus`]. It never returns an error.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::error::CoreError;
use crate::race::with_deadline;
use crate::transport::{HttpTransport, ReqwestTransport, TransportError};
use crate::types::{ProbeResult, ProbeStatus, ProbeTarget};

/// Default per-probe deadline in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 100;

/// Prober settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Build a config from a caller-supplied timeout, rejecting zero.
    pub fn from_millis(timeout_ms: u64) -> Result<Self, CoreError> {
        if timeout_ms == 0 {
            return Err(CoreError::InvalidTimeout(
                "timeout must be a positive number of milliseconds".to_string(),
            ));
        }
        Ok(Self {
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

/// Probes single targets with a fixed deadline.
///
/// Holds no mutable state; one prober can serve any number of concurrent
/// probes.
#[derive(Debug, Clone)]
pub struct Prober<T = ReqwestTransport> {
    transport: T,
    config: ProbeConfig,
}

impl Prober<ReqwestTransport> {
    /// Prober over a fresh reqwest client.
    pub fn new(config: ProbeConfig) -> Result<Self, CoreError> {
        Ok(Self::with_transport(ReqwestTransport::new()?, config))
    }
}

impl<T: HttpTransport> Prober<T> {
    pub fn with_transport(transport: T, config: ProbeConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Probe `target` with the configured deadline.
    pub async fn probe(&self, target: &ProbeTarget) -> ProbeResult {
        self.probe_with_timeout(target, self.config.timeout).await
    }

    /// Probe `target` with an explicit deadline.
    ///
    /// A zero deadline yields `Timeout` without issuing a request. So does
    /// an address that is not a bare host, but with `NoResponse`.
    pub async fn probe_with_timeout(&self, target: &ProbeTarget, timeout: Duration) -> ProbeResult {
        let status = if timeout.is_zero() {
            ProbeStatus::Timeout
        } else if let Some(url) = target.request_url() {
            let outcome = with_deadline(self.transport.get(url.as_str()), timeout).await;
            classify(outcome)
        } else {
            trace!(addr = %target, "not a bare host, skipping request");
            ProbeStatus::NoResponse
        };

        debug!(addr = %target, status = %status, "probe settled");
        if status.is_responded() {
            info!("Device found at {}", target);
        }

        ProbeResult::new(target.clone(), status)
    }
}

/// Fold a race outcome into a status. `None` means the deadline won.
pub fn classify(outcome: Option<Result<u16, TransportError>>) -> ProbeStatus {
    match outcome {
        None => ProbeStatus::Timeout,
        Some(Ok(code)) => ProbeStatus::from_status_code(code),
        // A cross-origin rejection means something is listening even though
        // the content is unreadable. Known false-positive risk.
        Some(Err(e)) if e.is_cross_origin() => ProbeStatus::Responded,
        Some(Err(e)) => {
            trace!(error = %e, "transport failure");
            ProbeStatus::NoResponse
        }
    }
}

/// Probe one address on port 80 with a default reqwest client.
///
/// Client construction failure is reported as `NoResponse`.
pub async fn probe_address(address: &str, timeout_ms: u64) -> ProbeResult {
    let target = ProbeTarget::new(address);
    let config = ProbeConfig {
        timeout: Duration::from_millis(timeout_ms),
    };

    match Prober::new(config) {
        Ok(prober) => prober.probe(&target).await,
        Err(e) => {
            debug!(error = %e, "could not build HTTP client");
            ProbeResult::new(target, ProbeStatus::NoResponse)
        }
    }
}
