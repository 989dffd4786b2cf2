//! Opt-in timing hooks for the strip pipeline.
//!
//! Timing is only collected when the `engine_metrics` feature is enabled and
//! the target is not WASM (`std::time::Instant` is unavailable there). In every
//! other build the calls below compile to plain pass-throughs.
//!
//! ```ignore
//! use mobius_engine::geom::{GeomMetrics, TimingBucket};
//!
//! let mut metrics = GeomMetrics::default();
//! metrics.begin();
//! let area = metrics.time(TimingBucket::Area, || strip.surface_area());
//! if let Some(report) = metrics.end() {
//!     println!("area: {} ns", report.area_ns);
//! }
//! ```

/// Pipeline stages that can be timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimingBucket {
    /// Parameter sequences and meshgrid construction.
    Grid,
    /// Evaluating the parameterization on the grid.
    Sampling,
    /// Finite differences and the area sum.
    Area,
    /// Boundary resampling and chord summation.
    EdgeLength,
    /// Triangle mesh export.
    Meshing,
}

/// Cumulative nanoseconds per [`TimingBucket`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeomTimingReport {
    pub grid_ns: u64,
    pub sampling_ns: u64,
    pub area_ns: u64,
    pub edge_length_ns: u64,
    pub meshing_ns: u64,
}

impl GeomTimingReport {
    /// Returns the total time across all buckets in nanoseconds.
    #[must_use]
    pub fn total_ns(&self) -> u64 {
        self.grid_ns
            .saturating_add(self.sampling_ns)
            .saturating_add(self.area_ns)
            .saturating_add(self.edge_length_ns)
            .saturating_add(self.meshing_ns)
    }

    #[must_use]
    pub fn total_ms(&self) -> f64 {
        self.total_ns() as f64 / 1_000_000.0
    }
}

/// Accumulator for timing pipeline stages.
///
/// When metrics are disabled all methods are no-ops and [`end`](Self::end)
/// returns `None`.
#[derive(Debug, Default)]
pub struct GeomMetrics {
    #[cfg(all(feature = "engine_metrics", not(target_arch = "wasm32")))]
    report: GeomTimingReport,
}

impl GeomMetrics {
    /// Resets all timing counters to zero.
    pub fn begin(&mut self) {
        #[cfg(all(feature = "engine_metrics", not(target_arch = "wasm32")))]
        {
            self.report = GeomTimingReport::default();
        }
    }

    #[must_use]
    pub fn end(&self) -> Option<GeomTimingReport> {
        #[cfg(all(feature = "engine_metrics", not(target_arch = "wasm32")))]
        {
            Some(self.report.clone())
        }
        #[cfg(not(all(feature = "engine_metrics", not(target_arch = "wasm32"))))]
        {
            None
        }
    }

    /// Runs `f` and adds its elapsed time to `bucket`.
    pub fn time<R>(&mut self, bucket: TimingBucket, f: impl FnOnce() -> R) -> R {
        #[cfg(all(feature = "engine_metrics", not(target_arch = "wasm32")))]
        {
            let start = std::time::Instant::now();
            let result = f();
            let nanos = start.elapsed().as_nanos().min(u128::from(u64::MAX)) as u64;
            self.add_to_bucket(bucket, nanos);
            result
        }

        #[cfg(not(all(feature = "engine_metrics", not(target_arch = "wasm32"))))]
        {
            let _ = bucket;
            f()
        }
    }

    #[cfg(all(feature = "engine_metrics", not(target_arch = "wasm32")))]
    fn add_to_bucket(&mut self, bucket: TimingBucket, nanos: u64) {
        let slot = match bucket {
            TimingBucket::Grid => &mut self.report.grid_ns,
            TimingBucket::Sampling => &mut self.report.sampling_ns,
            TimingBucket::Area => &mut self.report.area_ns,
            TimingBucket::EdgeLength => &mut self.report.edge_length_ns,
            TimingBucket::Meshing => &mut self.report.meshing_ns,
        };
        *slot = slot.saturating_add(nanos);
    }
}
