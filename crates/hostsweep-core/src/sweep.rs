//! Sequential sweep driver.
//!
//! Probes one target at a time, awaiting each before starting the next, and
//! returns results in input order.

use tracing::{debug, info};

use crate::probe::Prober;
use crate::range::AddressRange;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{ProbeResult, ProbeTarget, DEFAULT_PORT};

/// When a sweep over one range stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepMode {
    /// Stop at the first `Responded` address
    #[default]
    FirstResponder,
    /// Probe every address
    Exhaustive,
}

/// Trait for receiving per-probe progress updates.
///
/// The CLI drives an `indicatif` progress bar from this.
pub trait SweepProgress {
    fn on_start(&self, total: usize);
    fn on_result(&self, result: &ProbeResult);
    fn on_finish(&self);
}

/// No-op progress handler for when progress tracking isn't needed.
pub struct NoopProgress;

impl SweepProgress for NoopProgress {
    fn on_start(&self, _total: usize) {}
    fn on_result(&self, _result: &ProbeResult) {}
    fn on_finish(&self) {}
}

/// Results gathered for one range.
#[derive(Debug, Clone)]
pub struct RangeReport {
    pub range: AddressRange,
    pub results: Vec<ProbeResult>,
}

impl RangeReport {
    /// Targets that responded, in probe order.
    pub fn found(&self) -> Vec<&ProbeTarget> {
        self.results
            .iter()
            .filter(|r| r.status.is_responded())
            .map(|r| &r.target)
            .collect()
    }
}

/// Sequential sweeper over a shared prober.
pub struct Sweeper<T = ReqwestTransport> {
    prober: Prober<T>,
    mode: SweepMode,
    port: u16,
}

impl<T: HttpTransport> Sweeper<T> {
    pub fn new(prober: Prober<T>, mode: SweepMode) -> Self {
        Self {
            prober,
            mode,
            port: DEFAULT_PORT,
        }
    }

    /// Port used for targets generated from ranges.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn mode(&self) -> SweepMode {
        self.mode
    }

    /// Probe `targets` in order.
    pub async fn run<I>(&self, targets: I) -> Vec<ProbeResult>
    where
        I: IntoIterator<Item = ProbeTarget>,
    {
        self.run_with_progress(targets, &NoopProgress).await
    }

    pub async fn run_with_progress<I, P>(&self, targets: I, progress: &P) -> Vec<ProbeResult>
    where
        I: IntoIterator<Item = ProbeTarget>,
        P: SweepProgress + ?Sized,
    {
        let targets: Vec<ProbeTarget> = targets.into_iter().collect();
        let mut results = Vec::with_capacity(targets.len());
        progress.on_start(targets.len());

        for target in &targets {
            let result = self.prober.probe(target).await;
            progress.on_result(&result);

            let stop = self.mode == SweepMode::FirstResponder && result.status.is_responded();
            results.push(result);
            if stop {
                debug!(addr = %target, "stopping at first responder");
                break;
            }
        }

        progress.on_finish();
        results
    }

    /// Sweep one range.
    pub async fn sweep_range<P>(&self, range: AddressRange, progress: &P) -> RangeReport
    where
        P: SweepProgress + ?Sized,
    {
        info!("Sweeping {} ({} addresses)", range, range.len());
        let results = self
            .run_with_progress(range.targets_on_port(self.port), progress)
            .await;
        RangeReport { range, results }
    }

    /// Sweep each range in turn.
    pub async fn sweep_ranges<P>(&self, ranges: &[AddressRange], progress: &P) -> Vec<RangeReport>
    where
        P: SweepProgress + ?Sized,
    {
        let mut reports = Vec::with_capacity(ranges.len());
        for range in ranges {
            reports.push(self.sweep_range(*range, progress).await);
        }
        reports
    }
}
