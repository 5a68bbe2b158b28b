//! Symbol watchlists: parsing and the one-time data fetch.
//!
//! Quote data does not change across trials, so every series is fetched
//! once before the search loop starts. Symbols that fail to fetch or come
//! back too thin are warned about and dropped; the run only fails when
//! nothing usable remains.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::domain::error::TrendclimbError;
use crate::domain::quote::{Interval, Quote, QuoteSeries};
use crate::ports::data_port::QuotePort;

/// Fewer quotes than this and a backtest says nothing useful.
pub const MIN_QUOTES: usize = 10;

#[derive(Debug, Clone, thiserror::Error)]
pub enum WatchlistError {
    #[error("empty token in symbol list")]
    EmptyToken,

    #[error("duplicate symbol: {0}")]
    DuplicateSymbol(String),
}

/// Parse a comma-separated ticker list, trimming and uppercasing.
pub fn parse_symbols(input: &str) -> Result<Vec<String>, WatchlistError> {
    let mut symbols = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(WatchlistError::EmptyToken);
        }
        let symbol = trimmed.to_uppercase();
        if seen.contains(&symbol) {
            return Err(WatchlistError::DuplicateSymbol(symbol));
        }
        seen.insert(symbol.clone());
        symbols.push(symbol);
    }

    Ok(symbols)
}

/// Admission check for one fetched series: empty and too-thin fetches are
/// rejected with the symbol's name attached.
pub fn admit_series(symbol: &str, quotes: Vec<Quote>) -> Result<QuoteSeries, TrendclimbError> {
    if quotes.is_empty() {
        return Err(TrendclimbError::NoData {
            symbol: symbol.to_string(),
        });
    }
    if quotes.len() < MIN_QUOTES {
        return Err(TrendclimbError::InsufficientData {
            symbol: symbol.to_string(),
            periods: quotes.len(),
            minimum: MIN_QUOTES,
        });
    }
    Ok(QuoteSeries::new(symbol.to_string(), quotes))
}

/// Fetch every symbol's series up front. Per-symbol failures are
/// recoverable (warn and skip); an empty result is not.
pub fn gather_series(
    quote_port: &dyn QuotePort,
    symbols: &[String],
    start: NaiveDate,
    end: NaiveDate,
    interval: Interval,
) -> Result<Vec<QuoteSeries>, TrendclimbError> {
    let mut gathered = Vec::new();

    for symbol in symbols {
        let quotes = match quote_port.fetch_quotes(symbol, start, end, interval) {
            Ok(quotes) => quotes,
            Err(e) => {
                eprintln!("Warning: skipping {symbol} ({e})");
                continue;
            }
        };

        match admit_series(symbol, quotes) {
            Ok(series) => {
                eprintln!("  {symbol}: {} quotes [OK]", series.len());
                gathered.push(series);
            }
            Err(e) => eprintln!("Warning: skipping {symbol} ({e})"),
        }
    }

    if gathered.is_empty() {
        return Err(TrendclimbError::EmptyWatchlist);
    }

    Ok(gathered)
}
