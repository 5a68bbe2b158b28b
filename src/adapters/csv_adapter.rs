//! CSV file quote adapter.
//!
//! One file per (symbol, interval): `{SYMBOL}_{interval}.csv` with a
//! `date,open,close,volume` header. Empty price cells mean the value is
//! missing for that period, which the core handles as a skip.

use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::domain::error::TrendclimbError;
use crate::domain::quote::{Interval, Quote};
use crate::ports::data_port::QuotePort;

pub struct CsvQuoteAdapter {
    base_path: PathBuf,
}

impl CsvQuoteAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn quote_path(&self, symbol: &str, interval: Interval) -> PathBuf {
        self.base_path
            .join(format!("{}_{}.csv", symbol, interval.code()))
    }
}

fn data_error(reason: String) -> TrendclimbError {
    TrendclimbError::Data { reason }
}

/// Empty cell (or absent column) means missing; anything else must parse.
fn parse_optional_price(
    field: Option<&str>,
    name: &str,
) -> Result<Option<f64>, TrendclimbError> {
    match field {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| data_error(format!("invalid {name} value: {e}"))),
    }
}

impl QuotePort for CsvQuoteAdapter {
    fn fetch_quotes(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
        interval: Interval,
    ) -> Result<Vec<Quote>, TrendclimbError> {
        let path = self.quote_path(symbol, interval);
        let content = fs::read_to_string(&path)
            .map_err(|e| data_error(format!("failed to read {}: {}", path.display(), e)))?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut quotes = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| data_error(format!("CSV parse error: {e}")))?;

            let date_str = record
                .get(0)
                .ok_or_else(|| data_error("missing date column".into()))?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
                .map_err(|e| data_error(format!("invalid date format: {e}")))?;

            if date < start || date > end {
                continue;
            }

            quotes.push(Quote {
                date,
                open: parse_optional_price(record.get(1), "open")?,
                close: parse_optional_price(record.get(2), "close")?,
                volume: parse_optional_price(record.get(3), "volume")?,
            });
        }

        // Stable sort: intraday rows sharing a date keep file order.
        quotes.sort_by_key(|q| q.date);
        Ok(quotes)
    }

    fn list_symbols(&self) -> Result<Vec<String>, TrendclimbError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| {
            data_error(format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let mut symbols = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| data_error(format!("directory entry error: {e}")))?;
            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            let Some(stem) = name_str.strip_suffix(".csv") else {
                continue;
            };
            let Some((symbol, interval)) = stem.rsplit_once('_') else {
                continue;
            };
            if Interval::parse(interval).is_none() || symbol.is_empty() {
                continue;
            }
            let symbol = symbol.to_string();
            if !symbols.contains(&symbol) {
                symbols.push(symbol);
            }
        }

        symbols.sort();
        Ok(symbols)
    }
}
