//! Candidate mutation: weighted operators over the parameter space.
//!
//! Exactly one operator is applied per mutation, chosen by partitioning the
//! unit interval into weight buckets and drawing a uniform value. Modeling
//! the operators as a tagged list keeps selection and application
//! independently testable.

use rand::Rng;

use crate::domain::candidate::Candidate;
use crate::domain::quote::Interval;

/// Buy-threshold step used by the daily reference runs.
pub const DAILY_BUY_STEP: f64 = 0.0000025;
/// Buy-threshold step used by the intraday reference runs.
pub const INTRADAY_BUY_STEP: f64 = 0.00001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MutationOp {
    BumpTrendLength,
    /// Decrement, clamped: `trend_length` never drops below 1.
    DropTrendLength,
    RaiseBuyThreshold(f64),
    LowerBuyThreshold(f64),
    /// Uniform redraw over the four intraday intervals.
    ReassignInterval,
}

impl MutationOp {
    /// Apply this operator to a copy of `candidate`. The input is never
    /// modified.
    pub fn apply<R: Rng>(&self, candidate: &Candidate, rng: &mut R) -> Candidate {
        let mut next = candidate.clone();
        match *self {
            MutationOp::BumpTrendLength => next.trend_length += 1,
            MutationOp::DropTrendLength => {
                if next.trend_length > 1 {
                    next.trend_length -= 1;
                }
            }
            MutationOp::RaiseBuyThreshold(step) => next.buy_threshold += step,
            MutationOp::LowerBuyThreshold(step) => next.buy_threshold -= step,
            MutationOp::ReassignInterval => {
                let choices = Interval::INTRADAY;
                next.interval = Some(choices[rng.gen_range(0..choices.len())]);
            }
        }
        next
    }
}

/// A weighted list of mutation operators. Weights are bucket widths on the
/// unit interval; the reference plans use equal buckets.
#[derive(Debug, Clone)]
pub struct MutationPlan {
    ops: Vec<(f64, MutationOp)>,
}

impl MutationPlan {
    pub fn new(ops: Vec<(f64, MutationOp)>) -> Self {
        Self { ops }
    }

    /// Four equal buckets (boundaries 0.25/0.5/0.75), daily threshold step.
    pub fn daily() -> Self {
        Self::new(vec![
            (0.25, MutationOp::BumpTrendLength),
            (0.25, MutationOp::DropTrendLength),
            (0.25, MutationOp::RaiseBuyThreshold(DAILY_BUY_STEP)),
            (0.25, MutationOp::LowerBuyThreshold(DAILY_BUY_STEP)),
        ])
    }

    /// Five equal buckets (boundaries 0.2/0.4/0.6/0.8), intraday threshold
    /// step, interval reassignment as the fifth branch.
    pub fn intraday() -> Self {
        Self::new(vec![
            (0.2, MutationOp::BumpTrendLength),
            (0.2, MutationOp::DropTrendLength),
            (0.2, MutationOp::RaiseBuyThreshold(INTRADAY_BUY_STEP)),
            (0.2, MutationOp::LowerBuyThreshold(INTRADAY_BUY_STEP)),
            (0.2, MutationOp::ReassignInterval),
        ])
    }

    /// Operator whose cumulative-weight bucket contains `draw`. Draws past
    /// the last boundary (or an empty plan) select nothing.
    pub fn select(&self, draw: f64) -> Option<MutationOp> {
        let mut boundary = 0.0;
        for (weight, op) in &self.ops {
            boundary += weight;
            if draw < boundary {
                return Some(*op);
            }
        }
        self.ops.last().map(|(_, op)| *op)
    }

    /// Produce a structurally valid neighbor of `candidate`.
    pub fn mutate<R: Rng>(&self, candidate: &Candidate, rng: &mut R) -> Candidate {
        match self.select(rng.gen_range(0.0..1.0)) {
            Some(op) => op.apply(candidate, rng),
            None => candidate.clone(),
        }
    }
}
