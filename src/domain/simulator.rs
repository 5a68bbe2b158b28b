//! Cash/shares replay of the decision policy over one quote series.

use crate::domain::candidate::Candidate;
use crate::domain::policy::{decide, Decision};
use crate::domain::quote::Quote;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipCause {
    Weekend,
    MissingPrice,
}

/// What happened at one period of the replay. Skips are first-class
/// outcomes, not swallowed faults, so runs can be audited after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodOutcome {
    Bought,
    Sold,
    Held,
    Skipped(SkipCause),
}

/// Simulation state: fully invested or fully cash, never a mix.
/// After the first executed trade at most one field is nonzero.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub cash: f64,
    pub shares: f64,
}

impl Position {
    pub fn new(starting_cash: f64) -> Self {
        Position {
            cash: starting_cash,
            shares: 0.0,
        }
    }

    pub fn net_worth(&self, price: f64) -> f64 {
        self.shares * price + self.cash
    }
}

#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub starting_cash: f64,
    pub net_worth: f64,
    pub position: Position,
    pub outcomes: Vec<PeriodOutcome>,
}

impl SimulationResult {
    pub fn buys(&self) -> usize {
        self.count(|o| o == PeriodOutcome::Bought)
    }

    pub fn sells(&self) -> usize {
        self.count(|o| o == PeriodOutcome::Sold)
    }

    pub fn holds(&self) -> usize {
        self.count(|o| o == PeriodOutcome::Held)
    }

    pub fn skips(&self) -> usize {
        self.count(|o| matches!(o, PeriodOutcome::Skipped(_)))
    }

    fn count(&self, pred: impl Fn(PeriodOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(**o)).count()
    }
}

/// Most recent present open, falling back to the most recent close.
/// The reference run values the final position at the last period's open.
fn last_known_price(quotes: &[Quote]) -> Option<f64> {
    quotes
        .iter()
        .rev()
        .find_map(|q| q.open)
        .or_else(|| quotes.iter().rev().find_map(|q| q.close))
}

/// Replay the policy over `quotes` starting from all-cash.
///
/// Per period: a BUY with cash on hand converts all cash to shares at the
/// period's open; a SELL with shares on hand converts all shares to cash at
/// the period's close; anything else holds. A period whose required price
/// is absent is skipped with position state untouched — one bad period can
/// never abort the run. With `skip_weekends` set, Saturday/Sunday dates are
/// skipped outright (calendar-day replay framing for daily runs).
pub fn simulate(
    quotes: &[Quote],
    candidate: &Candidate,
    starting_cash: f64,
    skip_weekends: bool,
) -> SimulationResult {
    let mut position = Position::new(starting_cash);
    let mut outcomes = Vec::with_capacity(quotes.len());

    for i in 0..quotes.len() {
        let quote = &quotes[i];

        if skip_weekends && quote.is_weekend() {
            outcomes.push(PeriodOutcome::Skipped(SkipCause::Weekend));
            continue;
        }

        let outcome = match decide(&quotes[..i], candidate) {
            Decision::Buy if position.cash > 0.0 => match quote.open {
                Some(open) if open != 0.0 => {
                    position.shares += position.cash / open;
                    position.cash = 0.0;
                    PeriodOutcome::Bought
                }
                _ => PeriodOutcome::Skipped(SkipCause::MissingPrice),
            },
            Decision::Sell if position.shares > 0.0 => match quote.close {
                Some(close) => {
                    position.cash += position.shares * close;
                    position.shares = 0.0;
                    PeriodOutcome::Sold
                }
                None => PeriodOutcome::Skipped(SkipCause::MissingPrice),
            },
            _ => PeriodOutcome::Held,
        };
        outcomes.push(outcome);
    }

    let net_worth = match last_known_price(quotes) {
        Some(price) => position.net_worth(price),
        None => position.cash,
    };

    SimulationResult {
        starting_cash,
        net_worth,
        position,
        outcomes,
    }
}
