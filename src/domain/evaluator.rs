//! Fitness: percent return of a candidate over one or more quote series.

use crate::domain::candidate::Candidate;
use crate::domain::quote::QuoteSeries;
use crate::domain::simulator::simulate;

/// Percent return of one series. Starting capital is the opening price of
/// the first quote (one "unit" of simulated capital, anchored to an open
/// just like the final valuation). A series that cannot anchor starting
/// capital — empty, or no usable first open — scores 0.
pub fn evaluate_series(series: &QuoteSeries, candidate: &Candidate, skip_weekends: bool) -> f64 {
    let starting_money = match series.quotes.first().and_then(|q| q.open) {
        Some(open) if open > 0.0 => open,
        _ => return 0.0,
    };
    let result = simulate(&series.quotes, candidate, starting_money, skip_weekends);
    (result.net_worth - starting_money) / starting_money
}

/// Unweighted arithmetic mean of per-series percent returns. Running the
/// same parameters over several instruments damps overfitting to any one
/// instrument's idiosyncrasies. An empty set scores 0.
pub fn evaluate(set: &[QuoteSeries], candidate: &Candidate, skip_weekends: bool) -> f64 {
    if set.is_empty() {
        return 0.0;
    }
    let total: f64 = set
        .iter()
        .map(|series| evaluate_series(series, candidate, skip_weekends))
        .sum();
    total / set.len() as f64
}

/// Buy-and-hold reference ratio for a benchmark series: first close over
/// last open, exactly as the reference run reports it.
pub fn benchmark_change(series: &QuoteSeries) -> Option<f64> {
    let first_close = series.quotes.first().and_then(|q| q.close)?;
    let last_open = series.quotes.last().and_then(|q| q.open)?;
    if last_open == 0.0 {
        return None;
    }
    Some(first_close / last_open)
}
