//! Search candidates: one point in the decision-rule parameter space.

use crate::domain::quote::Interval;

/// Reference starting parameters for the search.
pub const INITIAL_TREND_LENGTH: usize = 5;
pub const INITIAL_BUY_THRESHOLD: f64 = 0.00001;
pub const INITIAL_SELL_THRESHOLD: f64 = -0.00002;

/// Immutable parameter set for the trailing-trend rule. Mutation always
/// produces a new value, so the search driver can compare the previous
/// candidate's score without it changing underfoot.
///
/// Invariant: `trend_length >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub trend_length: usize,
    pub buy_threshold: f64,
    pub sell_threshold: f64,
    /// Sampling granularity; `Some` only in the intraday variant.
    pub interval: Option<Interval>,
}

impl Candidate {
    pub fn daily() -> Self {
        Candidate {
            trend_length: INITIAL_TREND_LENGTH,
            buy_threshold: INITIAL_BUY_THRESHOLD,
            sell_threshold: INITIAL_SELL_THRESHOLD,
            interval: None,
        }
    }

    pub fn intraday() -> Self {
        Candidate {
            interval: Some(Interval::FiveMinutes),
            ..Candidate::daily()
        }
    }

    /// Granularity to request from the data source.
    pub fn fetch_interval(&self) -> Interval {
        self.interval.unwrap_or(Interval::OneDay)
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "trend_length={} buy_threshold={} sell_threshold={}",
            self.trend_length, self.buy_threshold, self.sell_threshold
        )?;
        if let Some(interval) = self.interval {
            write!(f, " interval={interval}")?;
        }
        Ok(())
    }
}
