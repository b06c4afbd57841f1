//! # Fusion Explorer
//!
//! Runs the Binary Fusion Tap pipeline across a range of `k` and summarizes
//! how the seed, tap state, and ZPE overflow evolve.
//!
//! ## Features
//!
//! - **Range Exploration**: one [`KSummary`] per `k`, seeds folded incrementally
//! - **Progress Reporting**: callbacks for UI progress updates
//! - **Special Values**: first and largest overflow, power-of-two and Fibonacci rows
//! - **Rendering**: summary table, detailed blocks, bit-length chart, JSON export
//!
//! ## Example
//!
//! ```rust
//! use fusion_explorer::{explore, render_summary_table, ExplorerConfig};
//!
//! let summaries = explore(&ExplorerConfig::new().range(1, 12)).unwrap();
//! assert_eq!(summaries.len(), 12);
//! assert_eq!(summaries[10].zpe_overflow_decimal, 59);
//!
//! let table = render_summary_table(&summaries);
//! assert!(table.contains("Total k values explored: 12"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod render;
pub mod special;
pub mod summary;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use fusion_core::constants::{DEFAULT_EXPLORE_END, DEFAULT_EXPLORE_START, MAX_EXACT_K};
use fusion_core::error::{FusionError, Result};
use fusion_tap::derive_range;

pub use render::{render_chart, render_detailed, render_special, render_summary_table};
pub use special::{find_special, SpecialValues};
pub use summary::KSummary;

/// Number of `k` values between progress callbacks.
const PROGRESS_INTERVAL: u64 = 100;

/// Upper bound on rows reserved up front.
const MAX_PREALLOCATED: u64 = 1 << 16;

/// Explorer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// First `k` (inclusive)
    pub start: i64,
    /// Last `k` (inclusive)
    pub end: i64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_EXPLORE_START,
            end: DEFAULT_EXPLORE_END,
        }
    }
}

impl ExplorerConfig {
    /// Creates a new default configuration (`k` from 1 to 20).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first `k`.
    pub fn start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    /// Sets the last `k`.
    pub fn end(mut self, end: i64) -> Self {
        self.end = end;
        self
    }

    /// Sets both ends of the range.
    pub fn range(self, start: i64, end: i64) -> Self {
        self.start(start).end(end)
    }

    /// Checks that the range starts at 1 or above and is not empty.
    pub fn validate(&self) -> Result<()> {
        if self.start < 1 {
            return Err(self.invalid("start must be >= 1"));
        }
        if self.end < self.start {
            return Err(self.invalid("end must be >= start"));
        }
        Ok(())
    }

    /// Number of `k` values in the range (0 when empty).
    pub fn len(&self) -> u64 {
        if self.end < self.start {
            return 0;
        }
        self.end.abs_diff(self.start) + 1
    }

    /// True when the range holds no `k`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when part of the range lies past the exact-precision limit.
    pub fn includes_wrapped(&self) -> bool {
        self.end > MAX_EXACT_K
    }

    fn invalid(&self, reason: &str) -> FusionError {
        FusionError::InvalidRange {
            start: self.start,
            end: self.end,
            reason: reason.to_string(),
        }
    }
}

/// Exploration progress information.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExploreProgress {
    /// Total `k` values to explore
    pub total: u64,
    /// `k` values explored so far
    pub explored: u64,
    /// Percentage complete (0-100)
    pub percent: f64,
}

impl ExploreProgress {
    /// Creates a new progress tracker.
    pub fn new(total: u64) -> Self {
        Self {
            total,
            explored: 0,
            percent: 0.0,
        }
    }

    /// Updates the explored count.
    pub fn update(&mut self, explored: u64) {
        self.explored = explored;
        if self.total > 0 {
            self.percent = (explored as f64 / self.total as f64) * 100.0;
        }
    }
}

/// Explores every `k` in the configured range.
pub fn explore(config: &ExplorerConfig) -> Result<Vec<KSummary>> {
    explore_with_progress(config, |_| {})
}

/// Explores the configured range, reporting progress every
/// 100 values and once at the end.
#[instrument(skip(progress_callback))]
pub fn explore_with_progress<F>(config: &ExplorerConfig, mut progress_callback: F) -> Result<Vec<KSummary>>
where
    F: FnMut(&ExploreProgress),
{
    config.validate()?;

    let total = config.len();
    let mut progress = ExploreProgress::new(total);
    let mut summaries = Vec::with_capacity(usize::try_from(total.min(MAX_PREALLOCATED)).unwrap_or(0));

    info!(start = config.start, end = config.end, "Starting exploration");
    if config.includes_wrapped() {
        debug!(max_exact_k = MAX_EXACT_K, "range includes wrapped seeds");
    }

    for (explored, result) in (1u64..).zip(derive_range(config.start, config.end)) {
        summaries.push(KSummary::from(&result));

        if explored % PROGRESS_INTERVAL == 0 {
            progress.update(explored);
            progress_callback(&progress);
        }
    }

    progress.update(summaries.len() as u64);
    progress_callback(&progress);

    info!(explored = summaries.len(), "Exploration complete");

    Ok(summaries)
}

/// Serializes summaries as pretty-printed JSON.
pub fn to_json(summaries: &[KSummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}

/// Writes summaries as pretty-printed JSON to `path`.
pub fn write_json(summaries: &[KSummary], path: &Path) -> Result<()> {
    let json = to_json(summaries)?;
    std::fs::write(path, json)?;
    debug!(path = %path.display(), count = summaries.len(), "wrote exploration JSON");
    Ok(())
}
