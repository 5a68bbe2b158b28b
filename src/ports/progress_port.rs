//! Search progress reporting port trait.

use crate::domain::candidate::Candidate;

/// Receives per-trial and end-of-run reports from the search driver.
/// Formatting is the adapter's business.
pub trait ProgressPort {
    fn trial(&self, number: usize, candidate: &Candidate, fitness: f64, best_fitness: Option<f64>);

    fn complete(&self, best: &Candidate, best_fitness: f64);

    /// Default implementation: benchmark reporting is optional.
    fn benchmark(&self, symbol: &str, change: f64) {
        let _ = (symbol, change);
    }
}

/// Discards everything. Used where progress output is noise.
pub struct NullProgress;

impl ProgressPort for NullProgress {
    fn trial(&self, _: usize, _: &Candidate, _: f64, _: Option<f64>) {}

    fn complete(&self, _: &Candidate, _: f64) {}
}
