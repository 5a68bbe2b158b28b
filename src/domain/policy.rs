//! Trailing-trend decision policy.

use crate::domain::candidate::Candidate;
use crate::domain::quote::Quote;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Buy,
    Sell,
    Hold,
}

/// Trend signal over the trailing window: `1 - mean(close/open)`.
/// Positive when prices have been falling, negative when rising.
///
/// Sums `close/open` over the most recent `min(trend_length, window.len())`
/// quotes, skipping quotes with a missing or zero price, then divides by the
/// *configured* `trend_length` rather than the count actually summed. Near
/// the start of a series the average is therefore diluted toward zero and
/// the signal toward 1; this matches the reference behavior and biases the
/// earliest usable periods toward BUY.
pub fn trend_signal(window: &[Quote], candidate: &Candidate) -> f64 {
    let n = candidate.trend_length.min(window.len());
    let mut sum = 0.0;
    for quote in window.iter().rev().take(n) {
        if let Some(ratio) = quote.ratio() {
            sum += ratio;
        }
    }
    1.0 - sum / candidate.trend_length as f64
}

/// Pure decision for the period following `window`. Never fails; malformed
/// quotes simply drop out of the trend average.
pub fn decide(window: &[Quote], candidate: &Candidate) -> Decision {
    let signal = trend_signal(window, candidate);
    if signal > candidate.buy_threshold {
        Decision::Buy
    } else if signal < candidate.sell_threshold {
        Decision::Sell
    } else {
        Decision::Hold
    }
}
