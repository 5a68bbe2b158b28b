#![allow(dead_code)]

use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::HashMap;

use trendclimb::domain::candidate::Candidate;
use trendclimb::domain::error::TrendclimbError;
pub use trendclimb::domain::quote::{Interval, Quote, QuoteSeries};
use trendclimb::ports::data_port::QuotePort;
use trendclimb::ports::progress_port::ProgressPort;

pub struct MockQuotePort {
    pub data: HashMap<(String, Interval), Vec<Quote>>,
    pub errors: HashMap<String, String>,
}

impl MockQuotePort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_quotes(mut self, symbol: &str, interval: Interval, quotes: Vec<Quote>) -> Self {
        self.data.insert((symbol.to_string(), interval), quotes);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl QuotePort for MockQuotePort {
    fn fetch_quotes(
        &self,
        symbol: &str,
        _start: NaiveDate,
        _end: NaiveDate,
        interval: Interval,
    ) -> Result<Vec<Quote>, TrendclimbError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(TrendclimbError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self
            .data
            .get(&(symbol.to_string(), interval))
            .cloned()
            .unwrap_or_default())
    }

    fn list_symbols(&self) -> Result<Vec<String>, TrendclimbError> {
        let mut symbols: Vec<String> = self.data.keys().map(|(s, _)| s.clone()).collect();
        symbols.sort();
        symbols.dedup();
        Ok(symbols)
    }
}

/// Progress adapter that records everything it is told.
pub struct CollectingProgress {
    pub trials: RefCell<Vec<(usize, Candidate, f64, Option<f64>)>>,
    pub completed: RefCell<Option<(Candidate, f64)>>,
    pub benchmarks: RefCell<Vec<(String, f64)>>,
}

impl CollectingProgress {
    pub fn new() -> Self {
        Self {
            trials: RefCell::new(Vec::new()),
            completed: RefCell::new(None),
            benchmarks: RefCell::new(Vec::new()),
        }
    }
}

impl ProgressPort for CollectingProgress {
    fn trial(&self, number: usize, candidate: &Candidate, fitness: f64, best_fitness: Option<f64>) {
        self.trials
            .borrow_mut()
            .push((number, candidate.clone(), fitness, best_fitness));
    }

    fn complete(&self, best: &Candidate, best_fitness: f64) {
        *self.completed.borrow_mut() = Some((best.clone(), best_fitness));
    }

    fn benchmark(&self, symbol: &str, change: f64) {
        self.benchmarks
            .borrow_mut()
            .push((symbol.to_string(), change));
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn make_quote(date: NaiveDate, open: f64, close: f64) -> Quote {
    Quote {
        date,
        open: Some(open),
        close: Some(close),
        volume: Some(1000.0),
    }
}

/// Weekdays of January 2024, in order (Jan 1 was a Monday).
const JAN_2024_WEEKDAYS: [u32; 23] = [
    1, 2, 3, 4, 5, 8, 9, 10, 11, 12, 15, 16, 17, 18, 19, 22, 23, 24, 25, 26, 29, 30, 31,
];

/// `count` flat quotes on consecutive weekdays (count <= 23).
pub fn flat_weekday_quotes(count: usize, price: f64) -> Vec<Quote> {
    JAN_2024_WEEKDAYS
        .iter()
        .take(count)
        .map(|&day| make_quote(date(2024, 1, day), price, price))
        .collect()
}

/// One weekday quote per (open, close) pair, in order (at most 23 pairs).
pub fn weekday_quotes_from(pairs: &[(f64, f64)]) -> Vec<Quote> {
    pairs
        .iter()
        .zip(JAN_2024_WEEKDAYS.iter())
        .map(|(&(open, close), &day)| make_quote(date(2024, 1, day), open, close))
        .collect()
}
