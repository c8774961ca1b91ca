//! Shared core library for hostsweep.
//!
//! Provides the bounded single-address HTTP probe, the race combinator it is
//! built on, last-octet address ranges and a sequential sweep driver.

pub mod error;
pub mod probe;
pub mod race;
pub mod range;
pub mod sweep;
pub mod transport;
pub mod types;

pub use error::{CoreError, Result};
pub use probe::{probe_address, ProbeConfig, Prober, DEFAULT_TIMEOUT_MS};
pub use range::AddressRange;
pub use sweep::{RangeReport, SweepMode, Sweeper};
pub use transport::{HttpTransport, ReqwestTransport, TransportError};
pub use types::{ProbeResult, ProbeStatus, ProbeTarget};
